//! 토큰 발급 대상이 되는 최소 사용자 정보

use serde::{Deserialize, Serialize};

/// 인증 주체 (Principal)
///
/// 사용자 저장소가 생성하는 사용자 정보의 최소 투영입니다.
/// 인증 코어는 이 값을 읽기만 하며 저장하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// 사용자 고유 ID
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Principal {
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// 액세스 토큰의 `name` 클레임에 들어가는 표시 이름 (`"first last"`)
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// 토큰 `sub` 클레임에 들어가는 주체 문자열
    pub fn subject(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_and_subject() {
        let principal = Principal::new(42, "Jane", "Doe");

        assert_eq!(principal.display_name(), "Jane Doe");
        assert_eq!(principal.subject(), "42");
    }
}
