use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt a hex-encoded message
    Encrypt(EncryptArgs),

    /// Decrypt a hex-encoded message
    Decrypt(CommonArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Message bytes as a hex string.
    pub message: String,

    /// Mode of operation.
    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value_t = Mode::ModeCBC,
    )]
    pub mode: Mode,

    /// Key as a hex string.
    #[arg(short = 'k', long = "key")]
    pub key: Option<String>,

    /// Key size in bits.
    #[arg(long = "key-size", value_enum, default_value_t = KeySize::Bits128)]
    pub key_size: KeySize,

    /// IV as a hex string (CBC/CFB/OFB); normalized to 16 bytes.
    #[arg(long = "iv")]
    pub iv: Option<String>,

    /// Initial counter block as a hex string (CTR only).
    #[arg(long = "counter")]
    pub counter: Option<String>,

    /// Print every round step of every block.
    #[arg(long = "trace")]
    pub trace: bool,
}

#[derive(Args, Debug)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a random key of --key-size, print it, and use it.
    #[arg(long = "gen-key", conflicts_with = "key")]
    pub gen_key: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeySize {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}

impl KeySize {
    pub fn bits(self) -> u16 {
        match self {
            KeySize::Bits128 => 128,
            KeySize::Bits192 => 192,
            KeySize::Bits256 => 256,
        }
    }
}

impl From<KeySize> for aesviz::KeySize {
    fn from(size: KeySize) -> Self {
        match size {
            KeySize::Bits128 => aesviz::KeySize::Bits128,
            KeySize::Bits192 => aesviz::KeySize::Bits192,
            KeySize::Bits256 => aesviz::KeySize::Bits256,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum Mode {
    #[value(name = "ecb")]
    ModeECB,
    #[value(name = "cbc")]
    ModeCBC,
    #[value(name = "cfb")]
    ModeCFB,
    #[value(name = "ofb")]
    ModeOFB,
    #[value(name = "ctr")]
    ModeCTR,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::ModeECB => "ECB",
            Mode::ModeCBC => "CBC",
            Mode::ModeCFB => "CFB",
            Mode::ModeOFB => "OFB",
            Mode::ModeCTR => "CTR",
        }
    }
}
