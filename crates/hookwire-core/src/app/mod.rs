//! App - 受信側サービス層
//!
//! domain / catalog / typed を組み合わせて、transport 層から呼ばれる
//! 入口を提供します。
//!
//! # 主要コンポーネント
//! - **ReceiverBuilder**: Handler の登録と起動時検証
//! - **Receiver**: 配送 1 件の parse → dispatch
//! - **ReceiverConfig**: JSON の設定

pub mod builder;
pub mod config;
pub mod receiver;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, ReceiverBuilder};
pub use self::config::{ConfigError, ReceiverConfig};
pub use self::receiver::{Receipt, Receiver};
