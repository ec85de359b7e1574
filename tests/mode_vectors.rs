#![cfg(feature = "test-vectors")]

// Known-answer tests over the public API. Multi-block vectors are from NIST
// SP 800-38A; the single-block vector is from FIPS-197 appendix C.1.

use hex_literal::hex;

use aesviz::{Cipher, DecryptRequest, EncryptRequest, Key, KeySize, decrypt, encode_hex, encrypt};

const KEY_128: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");
const KEY_192: [u8; 24] = hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b");
const KEY_256: [u8; 32] = hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");

const PLAINTEXT: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172a"
    "ae2d8a571e03ac9c9eb76fac45af8e51"
    "30c81c46a35ce411e5fbc1191a0a52ef"
    "f69f2445df4f9b17ad2b417be66c3710"
);

const IV: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
const CTR_INIT: [u8; 16] = hex!("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");

fn encrypt_request(mode: &str, key: &[u8], iv: Option<&[u8]>, counter: Option<&[u8]>) -> EncryptRequest {
    EncryptRequest {
        plaintext_hex: encode_hex(&PLAINTEXT),
        key_hex: encode_hex(key),
        key_size: (key.len() * 8) as u16,
        mode: mode.to_string(),
        iv_hex: iv.map(encode_hex),
        ctr_counter_hex: counter.map(encode_hex),
    }
}

fn decrypt_request(
    mode: &str,
    key: &[u8],
    ciphertext_hex: &str,
    iv: Option<&[u8]>,
    counter: Option<&[u8]>,
) -> DecryptRequest {
    DecryptRequest {
        ciphertext_hex: ciphertext_hex.to_string(),
        key_hex: encode_hex(key),
        key_size: (key.len() * 8) as u16,
        mode: mode.to_string(),
        iv_hex: iv.map(encode_hex),
        ctr_counter_hex: counter.map(encode_hex),
    }
}

#[test]
fn fips_197_single_block() -> aesviz::Result<()> {
    let key = Key::new(&hex!("000102030405060708090a0b0c0d0e0f"), KeySize::Bits128)?;
    let cipher = Cipher::new(&key)?;

    let trace = cipher.encrypt_block(&hex!("00112233445566778899aabbccddeeff"))?;
    assert_eq!(trace.output, hex!("69c4e0d86a7b0430d8cdb78070b4c55a"));

    let back = cipher.decrypt_block(&trace.output)?;
    assert_eq!(back.output, hex!("00112233445566778899aabbccddeeff"));
    Ok(())
}

#[test]
fn sp800_38a_ecb() -> aesviz::Result<()> {
    // expected ciphertexts carry the encrypted full pad block at the end
    let cases: [(&[u8], &str); 3] = [
        (
            &KEY_128,
            "3ad77bb40d7a3660a89ecaf32466ef97\
             f5d3d58503b9699de785895a96fdbaaf\
             43b1cd7f598ece23881b00e3ed030688\
             7b0c785e27e8ad3f8223207104725dd4\
             a254be88e037ddd9d79fb6411c3f9df8",
        ),
        (
            &KEY_192,
            "bd334f1d6e45f25ff712a214571fa5cc\
             974104846d0ad3ad7734ecb3ecee4eef\
             ef7afd2270e2e60adce0ba2face6444e\
             9a4b41ba738d6c72fb16691603c18e0e\
             daa0af074bd8083c8a32d4fc563c55cc",
        ),
        (
            &KEY_256,
            "f3eed1bdb5d2a03c064b5a7e3db181f8\
             591ccb10d410ed26dc5ba74a31362870\
             b6ed21b99ca6f4f9f153e7b1beafed1d\
             23304b7a39f9f3ff067d8d8f9e24ecc7\
             4c45dfb3b3b484ec35b0512dc8c1c4d6",
        ),
    ];

    for (key, expected) in cases {
        let result = encrypt(&encrypt_request("ECB", key, None, None))?;
        assert_eq!(result.ciphertext_hex, expected);

        let back = decrypt(&decrypt_request("ECB", key, expected, None, None))?;
        assert_eq!(back.plaintext_hex, encode_hex(&PLAINTEXT));
    }
    Ok(())
}

#[test]
fn sp800_38a_ctr() -> aesviz::Result<()> {
    let cases: [(&[u8], &str); 3] = [
        (
            &KEY_128,
            "874d6191b620e3261bef6864990db6ce\
             9806f66b7970fdff8617187bb9fffdff\
             5ae4df3edbd5d35e5b4f09020db03eab\
             1e031dda2fbe03d1792170a0f3009cee",
        ),
        (
            &KEY_192,
            "1abc932417521ca24f2b0459fe7e6e0b\
             090339ec0aa6faefd5ccc2c6f4ce8e94\
             1e36b26bd1ebc670d1bd1d665620abf7\
             4f78a7f6d29809585a97daec58c6b050",
        ),
        (
            &KEY_256,
            "601ec313775789a5b7a7f504bbf3d228\
             f443e3ca4d62b59aca84e990cacaf5c5\
             2b0930daa23de94ce87017ba2d84988d\
             dfc9c58db67aada613c2dd08457941a6",
        ),
    ];

    for (key, expected) in cases {
        let result = encrypt(&encrypt_request("CTR", key, None, Some(&CTR_INIT)))?;
        assert_eq!(result.ciphertext_hex, expected);

        let back = decrypt(&decrypt_request("CTR", key, expected, None, Some(&CTR_INIT)))?;
        assert_eq!(back.plaintext_hex, encode_hex(&PLAINTEXT));
    }
    Ok(())
}

#[test]
fn sp800_38a_cbc_128() -> aesviz::Result<()> {
    let expected_prefix = "7649abac8119b246cee98e9b12e9197d\
                           5086cb9b507219ee95db113a917678b2\
                           73bed6b8e3c1743b7116e69e22229516\
                           3ff1caa1681fac09120eca307586e1a7";

    let result = encrypt(&encrypt_request("CBC", &KEY_128, Some(&IV), None))?;
    assert!(result.ciphertext_hex.starts_with(expected_prefix));
    assert_eq!(result.ciphertext_hex.len(), 5 * 32);

    let back = decrypt(&decrypt_request(
        "CBC",
        &KEY_128,
        &result.ciphertext_hex,
        Some(&IV),
        None,
    ))?;
    assert_eq!(back.plaintext_hex, encode_hex(&PLAINTEXT));
    Ok(())
}

#[test]
fn sp800_38a_cfb128_128() -> aesviz::Result<()> {
    let expected = "3b3fd92eb72dad20333449f8e83cfb4a\
                    c8a64537a0b3a93fcde3cdad9f1ce58b\
                    26751f67a3cbb140b1808cf187a4f4df\
                    c04b05357c5d1c0eeac4c66f9ff7f2e6";

    let result = encrypt(&encrypt_request("CFB", &KEY_128, Some(&IV), None))?;
    assert_eq!(result.ciphertext_hex, expected);

    let back = decrypt(&decrypt_request("CFB", &KEY_128, expected, Some(&IV), None))?;
    assert_eq!(back.plaintext_hex, encode_hex(&PLAINTEXT));
    Ok(())
}

#[test]
fn sp800_38a_ofb_128() -> aesviz::Result<()> {
    let expected = "3b3fd92eb72dad20333449f8e83cfb4a\
                    7789508d16918f03f53c52dac54ed825\
                    9740051e9c5fecf64344f7a82260edcc\
                    304c6528f659c77866a510d9c1d6ae5e";

    let result = encrypt(&encrypt_request("OFB", &KEY_128, Some(&IV), None))?;
    assert_eq!(result.ciphertext_hex, expected);

    let back = decrypt(&decrypt_request("OFB", &KEY_128, expected, Some(&IV), None))?;
    assert_eq!(back.plaintext_hex, encode_hex(&PLAINTEXT));
    Ok(())
}

#[test]
fn every_mode_round_trips_every_key_size() -> aesviz::Result<()> {
    let keys: [&[u8]; 3] = [&KEY_128, &KEY_192, &KEY_256];

    for mode in ["ECB", "CBC", "CFB", "OFB", "CTR"] {
        for key in keys {
            let encrypted = encrypt(&encrypt_request(mode, key, Some(&IV), Some(&CTR_INIT)))?;
            let decrypted = decrypt(&decrypt_request(
                mode,
                key,
                &encrypted.ciphertext_hex,
                Some(&IV),
                Some(&CTR_INIT),
            ))?;
            assert_eq!(
                decrypted.plaintext_hex,
                encode_hex(&PLAINTEXT),
                "round trip failed for {mode} with a {}-bit key",
                key.len() * 8
            );
        }
    }
    Ok(())
}
