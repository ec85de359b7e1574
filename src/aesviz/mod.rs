mod api;
mod cipher;
mod core;
mod engine;
mod error;
mod key;
mod modes;
mod trace;
mod util;

pub use api::{
    AesResult, BlockResult, DecryptRequest, DecryptionResult, EncryptRequest, EncryptionResult,
    HistoryRecord, Operation,
};
pub use cipher::Cipher;
pub use engine::{decrypt, encrypt};
pub use error::{Error, Result};
pub use key::{Key, KeySize};
pub use modes::Mode;
pub use trace::{BlockTrace, RoundStep, StateMatrix};
pub use util::{decode_hex, encode_hex};
