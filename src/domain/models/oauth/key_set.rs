//! 원격 서명 키 셋 (JWKS)
//!
//! 신원 제공자가 공개하는 JSON Web Key Set 문서입니다. 문서 모델은 `jsonwebtoken::jwk`를
//! 그대로 사용하며, `kid`가 없는 키도 문서의 일부로 받아들입니다.

use jsonwebtoken::jwk::{AlgorithmParameters, Jwk, JwkSet, KeyAlgorithm};

pub type RemoteKeySet = JwkSet;
pub type RemoteKey = Jwk;

/// `kid`가 일치하는 첫 번째 키를 찾습니다. `kid`가 없는 키는 선택되지 않습니다.
pub fn find_key<'a>(key_set: &'a RemoteKeySet, kid: &str) -> Option<&'a RemoteKey> {
    key_set
        .keys
        .iter()
        .find(|key| key.common.key_id.as_deref() == Some(kid))
}

/// RS256 서명 검증에 쓸 수 있는 키인지 확인합니다.
///
/// `kty`는 RSA여야 하고, `alg`가 명시되어 있다면 RS256이어야 합니다.
pub fn is_rs256_key(key: &RemoteKey) -> bool {
    matches!(key.algorithm, AlgorithmParameters::RSA(_))
        && matches!(key.common.key_algorithm, None | Some(KeyAlgorithm::RS256))
}
