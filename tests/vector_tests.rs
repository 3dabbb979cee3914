//! Published English BIP39 vectors: entropy, sentence and the seed for
//! passphrase "TREZOR".

use mnemonic_rs::{validator, Entropy, Language, Mnemonic, MnemonicError};

struct Vector {
    entropy: &'static str,
    sentence: &'static str,
    seed: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        entropy: "00000000000000000000000000000000",
        sentence: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        seed: "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04",
    },
    Vector {
        entropy: "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        sentence: "legal winner thank year wave sausage worth useful legal winner thank yellow",
        seed: "2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607",
    },
    Vector {
        entropy: "80808080808080808080808080808080",
        sentence: "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
        seed: "d71de856f81a8acc65e6fc851a38d4d7ec216fd0796d0a6827a3ad6ed5511a30fa280f12eb2e47ed2ac03b5c462a0358d18d69fe4f985ec81778c1b370b652a8",
    },
    Vector {
        entropy: "ffffffffffffffffffffffffffffffff",
        sentence: "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        seed: "ac27495480225222079d7be181583751e86f571027b0497b5b5d11218e0a8a13332572917f0f8e5a589620c6f15b11c61dee327651a14c34e18231052e48c069",
    },
    Vector {
        entropy: "0000000000000000000000000000000000000000",
        sentence: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon address",
        seed: "fa08713f46bf5cb48728ceb70e3aae1bc53c5cb7b4e29c5610261d1cbb7be3bed4d805256fec515754d2be35974fc5da678168e9d9bb0cb70948026923b0def3",
    },
    Vector {
        entropy: "8080808080808080808080808080808080808080",
        sentence: "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor accident",
        seed: "bc40a19ec918698b32e3e13ed906006d9e3b9987ba7dee6fc53a824774cc5be68f89b865bbfbac21b2fb99c016e214f54f239f77dd99881c1b81de275c60be3d",
    },
    Vector {
        entropy: "000000000000000000000000000000000000000000000000",
        sentence: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon agent",
        seed: "035895f2f481b1b0f01fcf8c289c794660b289981a78f8106447707fdd9666ca06da5a9a565181599b79f53b844d8a71dd9f439c52a3d7b3e8a79c906ac845fa",
    },
    Vector {
        entropy: "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
        sentence: "legal winner thank year wave sausage worth useful legal winner thank year wave sausage worth useful legal winner thank year viable",
        seed: "99c0597b2bef5ca4859e21075fee0fc931747a30469b6f564d95f74913c357aceb55221b4f4fe6965e871340b45754b1ae59e53da1797b69b30c5fa40ec105b8",
    },
    Vector {
        entropy: "0000000000000000000000000000000000000000000000000000000000000000",
        sentence: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
        seed: "bda85446c68413707090a52022edd26a1c9462295029f2e60cd7c4f2bbd3097170af7a4d73245cafa9c3cca8d561a7c3de6f5d4a10be8ed2a5e608d68f92fcc8",
    },
    Vector {
        entropy: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        sentence: "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
        seed: "dd48c104698c30cfe2b6142103248622fb7bb0ff692eebb00089b32d22484e1613912f0a5b694407be899ffd31ed3992c456cdf60f5d4564b8ba3f05a69890ad",
    },
    Vector {
        entropy: "9e885d952ad362caeb4efe34a8e91bd2",
        sentence: "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
        seed: "274ddc525802f7c828d8ef7ddbcdc5304e87ac3535913611fbbfa986d0c9e5476c91689f9c8a54fd55bd38606aa6a8595ad213d4c9c9f9aca3fb217069a41028",
    },
    Vector {
        entropy: "f30f8c1da665478f49b001d94c5fc452",
        sentence: "vessel ladder alter error federal sibling chat ability sun glass valve picture",
        seed: "2aaa9242daafcee6aa9d7269f17d4efe271e1b9a529178d7dc139cd18747090bf9d60295d0ce74309a78852a9caadf0af48aae1c6253839624076224374bc63f",
    },
];

#[test]
fn test_vectors_encode() {
    for v in VECTORS {
        let mnemonic = Mnemonic::from_hex(v.entropy, Language::English).unwrap();
        assert_eq!(mnemonic.sentence(), v.sentence, "entropy {}", v.entropy);
        assert_eq!(mnemonic.word_count(), v.entropy.len() * 4 * 3 / 32);
    }
}

#[test]
fn test_vectors_decode() {
    for v in VECTORS {
        let mnemonic = validator::recover(Language::English, v.sentence).unwrap();
        assert_eq!(mnemonic.to_entropy().unwrap().to_hex(), v.entropy);
    }
}

#[test]
fn test_vectors_validate() {
    for v in VECTORS {
        assert_eq!(validator::validate(Language::English, v.sentence), Ok(true));
        assert!(validator::is_valid(Language::English, v.sentence));
    }
}

#[test]
fn test_vectors_seed() {
    for v in VECTORS {
        let mnemonic = Mnemonic::from_hex(v.entropy, Language::English).unwrap();
        assert_eq!(mnemonic.generate_seed("TREZOR").to_hex(), v.seed, "entropy {}", v.entropy);
    }
}

#[test]
fn test_seed_without_passphrase() {
    let mnemonic = Mnemonic::from_hex("00000000000000000000000000000000", Language::English).unwrap();
    assert_eq!(
        mnemonic.generate_seed("").to_hex(),
        "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
    );
}

#[test]
fn test_checksum_word_mismatch() {
    // Same entropy bits as the 0x7f vector, last word's checksum bits wrong
    let sentence = "legal winner thank year wave sausage worth useful legal winner thank year";
    assert_eq!(validator::validate(Language::English, sentence), Ok(false));
    assert_eq!(
        validator::recover(Language::English, sentence).unwrap_err(),
        MnemonicError::InvalidMnemonic
    );
}

#[test]
fn test_entropy_round_trip_through_hex() {
    for v in VECTORS {
        let entropy = Entropy::from_hex(v.entropy).unwrap();
        let mnemonic = Mnemonic::from_entropy(&entropy, Language::English).unwrap();
        assert_eq!(mnemonic.to_entropy().unwrap(), entropy);
    }
}
