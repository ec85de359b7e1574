mod aesviz;

pub use aesviz::{
    AesResult, BlockResult, BlockTrace, Cipher, DecryptRequest, DecryptionResult, EncryptRequest,
    EncryptionResult, Error, HistoryRecord, Key, KeySize, Mode, Operation, Result, RoundStep,
    StateMatrix, decode_hex, decrypt, encode_hex, encrypt,
};
