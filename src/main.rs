mod args;

use args::{Cli, Commands};
use clap::Parser;

use std::time::Instant;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("either --key or --gen-key is required")]
    MissingKey,

    #[error(transparent)]
    Aes(#[from] aesviz::Error),
}

fn main() {
    if let Err(e) = aesviz_cli() {
        eprintln!("error: {e}");
    }
}

fn aesviz_cli() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt(enc) => {
            let common = enc.common;

            // use the provided key, or generate and print one
            let key_hex = if enc.gen_key {
                let key = aesviz::Key::random(common.key_size.into())?;
                let key_hex = aesviz::encode_hex(key.as_bytes());
                println!("key        = {key_hex}");
                key_hex
            } else {
                common.key.clone().ok_or(CliError::MissingKey)?
            };

            let request = aesviz::EncryptRequest {
                plaintext_hex: common.message.clone(),
                key_hex,
                key_size: common.key_size.bits(),
                mode: common.mode.name().to_string(),
                iv_hex: common.iv.clone(),
                ctr_counter_hex: common.counter.clone(),
            };

            let start = Instant::now();
            let result = aesviz::encrypt(&request)?;
            let duration = start.elapsed();

            if common.trace {
                print_blocks(&result.block_results);
            }

            println!("mode       = {}", result.mode);
            println!("padding    = {}", result.padding_description);
            println!("ciphertext = {}", result.ciphertext_hex);
            println!(
                "Encrypted {} block(s) in {} ms",
                result.block_results.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(common) => {
            let key_hex = common.key.clone().ok_or(CliError::MissingKey)?;

            let request = aesviz::DecryptRequest {
                ciphertext_hex: common.message.clone(),
                key_hex,
                key_size: common.key_size.bits(),
                mode: common.mode.name().to_string(),
                iv_hex: common.iv.clone(),
                ctr_counter_hex: common.counter.clone(),
            };

            let start = Instant::now();
            let result = aesviz::decrypt(&request)?;
            let duration = start.elapsed();

            if common.trace {
                print_blocks(&result.block_results);
            }

            println!("mode      = {}", result.mode);
            println!("padding   = {}", result.padding_description);
            println!("plaintext = {}", result.plaintext_hex);
            println!(
                "Decrypted {} block(s) in {} ms",
                result.block_results.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}

/// Prints each block's round steps, with the state matrices laid out in the
/// usual row-by-row form.
fn print_blocks(blocks: &[aesviz::BlockResult]) {
    for block in blocks {
        println!("block {}", block.block_index);
        for step in &block.aes_result.steps {
            println!("  {}", step.step);
            for row in 0..4 {
                let cells: Vec<String> = (0..4)
                    .map(|col| format!("{:02x}", step.state[col][row]))
                    .collect();
                println!("    {}", cells.join(" "));
            }
        }
    }
}
