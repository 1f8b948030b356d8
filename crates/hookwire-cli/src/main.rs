use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use hookwire_core::app::{Receiver, ReceiverBuilder, ReceiverConfig};
use hookwire_core::catalog::{
    AccountCreated, BankAccountUpdated, TransferCreated, TransferUpdated,
};
use hookwire_core::domain::{AccountId, Event, EventId, EventType, TransferId, TransferStatus};
use hookwire_core::typed::{Dispatch, Handler, HandlerError};

/// handler：decode 済みの payload をログに出すだけ
struct LogAccountCreated;

#[async_trait]
impl Handler<AccountCreated> for LogAccountCreated {
    async fn handle(&self, event: &Event, payload: AccountCreated) -> Result<(), HandlerError> {
        tracing::info!(
            event_id = %event.event_id(),
            account_id = %payload.account_id,
            "account created"
        );
        Ok(())
    }
}

struct LogTransfer;

#[async_trait]
impl Handler<TransferCreated> for LogTransfer {
    async fn handle(&self, event: &Event, payload: TransferCreated) -> Result<(), HandlerError> {
        tracing::info!(
            event_id = %event.event_id(),
            account_id = %payload.account_id,
            transfer_id = %payload.transfer_id,
            status = %payload.status,
            "transfer created"
        );
        Ok(())
    }
}

#[async_trait]
impl Handler<TransferUpdated> for LogTransfer {
    async fn handle(&self, event: &Event, payload: TransferUpdated) -> Result<(), HandlerError> {
        tracing::info!(
            event_id = %event.event_id(),
            transfer_id = %payload.transfer_id,
            status = %payload.status,
            is_final = payload.status.is_final(),
            "transfer updated"
        );
        Ok(())
    }
}

struct LogBankAccountUpdated;

#[async_trait]
impl Handler<BankAccountUpdated> for LogBankAccountUpdated {
    async fn handle(
        &self,
        event: &Event,
        payload: BankAccountUpdated,
    ) -> Result<(), HandlerError> {
        tracing::info!(
            event_id = %event.event_id(),
            bank_account_id = %payload.bank_account_id,
            status = %payload.status,
            reason = payload.status_reason.as_deref().unwrap_or(""),
            "bank account updated"
        );
        Ok(())
    }
}

fn build_receiver() -> anyhow::Result<Receiver> {
    let config = match std::env::var_os("HOOKWIRE_CONFIG") {
        Some(path) => ReceiverConfig::from_path(&path)?,
        None => ReceiverConfig::default(),
    };

    let receiver = ReceiverBuilder::new()
        .register::<AccountCreated, _>(LogAccountCreated)?
        .register::<TransferCreated, _>(LogTransfer)?
        .register::<TransferUpdated, _>(LogTransfer)?
        .register::<BankAccountUpdated, _>(LogBankAccountUpdated)?
        .with_config(&config)
        .build()?;
    Ok(receiver)
}

/// 配送 1 件を処理し、transport 層ならどう応答するかをログに出す
async fn deliver(receiver: &Receiver, source: &str, body: &[u8]) -> bool {
    match receiver.receive(body).await {
        Ok(receipt) => {
            if receipt.dispatch == Dispatch::Ignored {
                tracing::info!(
                    source,
                    event_id = %receipt.event_id,
                    event_type = %receipt.event_type,
                    "no handler for event type, skipped"
                );
            }
            true
        }
        Err(e) if e.is_sender_fault() => {
            tracing::warn!(source, error = %e, "rejected delivery");
            false
        }
        Err(e) => {
            tracing::error!(source, error = %e, "failed to handle delivery");
            false
        }
    }
}

/// サンプル配送：既知 2 種類 + 未知 1 種類 + 壊れた envelope
fn demo_deliveries() -> anyhow::Result<Vec<(String, Vec<u8>)>> {
    let account_created = AccountCreated {
        account_id: AccountId::generate(),
    };
    let transfer_created = TransferCreated {
        account_id: account_created.account_id.clone(),
        transfer_id: TransferId::generate(),
        status: TransferStatus::Created,
    };
    let unknown = Event::new(
        EventId::generate(),
        EventType::new("ticket.created"),
        serde_json::value::to_raw_value(&serde_json::json!({ "ticketID": "t-1" }))?,
        Utc::now(),
    );

    Ok(vec![
        (
            "demo:account.created".to_string(),
            Event::from_payload(EventId::generate(), &account_created, Utc::now())?.to_vec()?,
        ),
        (
            "demo:transfer.created".to_string(),
            Event::from_payload(EventId::generate(), &transfer_created, Utc::now())?.to_vec()?,
        ),
        ("demo:ticket.created".to_string(), unknown.to_vec()?),
        (
            "demo:malformed".to_string(),
            br#"{"eventID":123}"#.to_vec(),
        ),
    ])
}

fn read_source(arg: &str) -> anyhow::Result<Vec<u8>> {
    let mut body = Vec::new();
    if arg == "-" {
        std::io::stdin()
            .read_to_end(&mut body)
            .context("failed to read stdin")?;
    } else {
        body = std::fs::read(Path::new(arg)).with_context(|| format!("failed to read {arg}"))?;
    }
    Ok(body)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG で上書き可能（例: RUST_LOG=debug）
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hookwire_core=debug")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: hookwire-cli demo | hookwire-cli <delivery.json|->...");
        std::process::exit(2);
    }

    let receiver = build_receiver()?;

    let demo = args.len() == 1 && args[0] == "demo";
    let deliveries = if demo {
        demo_deliveries()?
    } else {
        args.iter()
            .map(|arg| Ok((arg.clone(), read_source(arg)?)))
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    let mut failed = 0usize;
    for (source, body) in &deliveries {
        if !deliver(&receiver, source, body).await {
            failed += 1;
        }
    }

    tracing::info!(total = deliveries.len(), failed, "done");
    // demo の malformed 配送は意図的に失敗させている
    if failed > 0 && !demo {
        anyhow::bail!("{failed} of {} deliveries failed", deliveries.len());
    }
    Ok(())
}
