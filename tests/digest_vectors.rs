//! Published reference vectors for every supported algorithm.

use hashkit::HashAlgorithm;

const FOX: &str = "The quick brown fox jumps over the lazy dog";

#[test]
fn empty_input_vectors() {
    let cases = [
        (HashAlgorithm::Sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        (
            HashAlgorithm::Sha224,
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
        ),
        (
            HashAlgorithm::Sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ),
        (
            HashAlgorithm::Sha384,
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
        ),
        (
            HashAlgorithm::Sha512,
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
        ),
    ];

    for (algo, expected) in cases {
        assert_eq!(algo.digest(b"").to_hex(), expected, "{algo} of empty input");
        assert_eq!(algo.digest_str("").to_hex(), expected);
    }
}

#[test]
fn quick_brown_fox_vectors() {
    let cases = [
        (HashAlgorithm::Sha1, "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"),
        (
            HashAlgorithm::Sha224,
            "730e109bd7a8a32b1cb9d9a09aa2325d2430587ddbc0c38bad911525",
        ),
        (
            HashAlgorithm::Sha256,
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
        ),
        (
            HashAlgorithm::Sha384,
            "ca737f1014a48f4c0b6dd43cb177b0afd9e5169367544c494011e3317dbf9a509cb1e5dc1e85a941bbee3d7f2afbc9b1",
        ),
        (
            HashAlgorithm::Sha512,
            "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb642e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6",
        ),
    ];

    for (algo, expected) in cases {
        assert_eq!(algo.digest_str(FOX).to_hex(), expected, "{algo} of fox sentence");
    }
}

#[test]
fn trailing_period_changes_everything() {
    // The classic avalanche demonstration: one appended byte.
    let with_period = format!("{FOX}.");

    assert_eq!(
        HashAlgorithm::Sha1.digest_str(&with_period).to_hex(),
        "408d94384216f890ff7a0c3528e8bed1e0b01621",
    );
    assert_eq!(
        HashAlgorithm::Sha224.digest_str(&with_period).to_hex(),
        "619cba8e8e05826e9b8c519c0a5c68f4fb653e8a3d8aa04bb2c8cd4c",
    );
    assert_eq!(
        HashAlgorithm::Sha256.digest_str(&with_period).to_hex(),
        "ef537f25c895bfa782526529a9b63d97aa631564d5d789c2b765448c8635fb6c",
    );

    for algo in HashAlgorithm::ALL {
        assert_ne!(
            algo.digest_str(FOX),
            algo.digest_str(&with_period),
            "{algo} digest unchanged by appended byte"
        );
    }
}

#[test]
fn single_byte_flip_changes_digest() {
    let mut message = FOX.as_bytes().to_vec();
    message[0] ^= 0x01;

    for algo in HashAlgorithm::ALL {
        assert_ne!(
            algo.digest(FOX.as_bytes()),
            algo.digest(&message),
            "{algo} digest unchanged by flipped byte"
        );
    }
}
