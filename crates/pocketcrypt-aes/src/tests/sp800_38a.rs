// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! NIST SP 800-38A Appendix F vectors (CBC and CFB128).
//!
//! The published vectors cover four block-aligned plaintext blocks. The
//! padding layer appends a fifth block, so only the first 64 ciphertext bytes
//! are compared against the publication.

use pocketcrypt_util::{hex_to_array, hex_to_bytes};

use crate::cipher::Cipher;
use crate::key::AesKey;
use crate::mode::Mode;
use crate::types::Iv;

const KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const KEY_256: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
const IV: &str = "000102030405060708090a0b0c0d0e0f";

const PLAINTEXT: &str = concat!(
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
);

fn run(key_hex: &str, mode: Mode, expected_hex: &str) {
    let key = AesKey::new(&hex_to_bytes(key_hex)).expect("Failed to AesKey::new(..)");
    let cipher = Cipher::new(&key, mode);
    let iv: Iv = hex_to_array(IV);
    let plaintext = hex_to_bytes(PLAINTEXT);
    let expected = hex_to_bytes(expected_hex);

    let ciphertext = cipher.encrypt_with_iv(&iv, &plaintext);

    assert_eq!(ciphertext.len(), plaintext.len() + 16);
    assert_eq!(&ciphertext[..expected.len()], &expected[..]);

    let recovered = cipher
        .decrypt(&iv, &ciphertext)
        .expect("Failed to decrypt(..)");
    assert_eq!(recovered, plaintext);
}

#[test]
fn test_cbc_aes128_f21() {
    run(
        KEY_128,
        Mode::Cbc,
        concat!(
            "7649abac8119b246cee98e9b12e9197d",
            "5086cb9b507219ee95db113a917678b2",
            "73bed6b8e3c1743b7116e69e22229516",
            "3ff1caa1681fac09120eca307586e1a7",
        ),
    );
}

#[test]
fn test_cbc_aes256_f25_first_block() {
    run(KEY_256, Mode::Cbc, "f58c4c04d6e5f1ba779eabfb5f7bfbd6");
}

#[test]
fn test_cfb128_aes128_f313() {
    run(
        KEY_128,
        Mode::Cfb,
        concat!(
            "3b3fd92eb72dad20333449f8e83cfb4a",
            "c8a64537a0b3a93fcde3cdad9f1ce58b",
            "26751f67a3cbb140b1808cf187a4f4df",
            "c04b05357c5d1c0eeac4c66f9ff7f2e6",
        ),
    );
}

#[test]
fn test_raw_chain_decrypts_published_cbc() {
    let key = AesKey::new(&hex_to_bytes(KEY_128)).expect("Failed to AesKey::new(..)");
    let iv: Iv = hex_to_array(IV);
    let mut buf = hex_to_bytes(concat!(
        "7649abac8119b246cee98e9b12e9197d",
        "5086cb9b507219ee95db113a917678b2",
    ));

    Mode::Cbc.decrypt_blocks(&key, &iv, &mut buf);

    assert_eq!(buf, hex_to_bytes(&PLAINTEXT[..64]));
}

#[test]
fn test_raw_chain_decrypts_published_cfb() {
    let key = AesKey::new(&hex_to_bytes(KEY_128)).expect("Failed to AesKey::new(..)");
    let iv: Iv = hex_to_array(IV);
    let mut buf = hex_to_bytes("3b3fd92eb72dad20333449f8e83cfb4a");

    Mode::Cfb.decrypt_blocks(&key, &iv, &mut buf);

    assert_eq!(buf, hex_to_bytes(&PLAINTEXT[..32]));
}
