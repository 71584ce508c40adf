//! MongoDB 연결
//!
//! 사용자 저장소가 쓰는 클라이언트를 만듭니다. 인증 코어는 조회를 재시도하지 않으므로
//! 조회 한 번의 최대 대기 시간은 여기서 정하는 연결/서버 선택 타임아웃이 결정합니다.
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="movie_catalog"
//! ```

use std::env;
use std::time::Duration;

use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client};

use crate::errors::AppError;

const DEFAULT_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE_NAME: &str = "movie_catalog";
const APP_NAME: &str = "movie_catalog_auth";

/// 연결 및 서버 선택 타임아웃
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// 연결 대상
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub uri: String,
    pub database_name: String,
}

impl DatabaseSettings {
    /// `MONGODB_URI`, `DATABASE_NAME`을 읽습니다. 없으면 로컬 기본값을 씁니다.
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_URI.to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string()),
        }
    }
}

/// MongoDB 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 변수 설정으로 연결합니다.
    pub async fn new() -> Result<Self, AppError> {
        Self::connect(DatabaseSettings::from_env()).await
    }

    /// 클라이언트를 만들고 `ping`으로 연결을 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - URI 파싱 실패
    /// * `AppError::DatabaseError` - 클라이언트 생성 또는 ping 실패
    pub async fn connect(settings: DatabaseSettings) -> Result<Self, AppError> {
        let mut options = ClientOptions::parse(&settings.uri)
            .await
            .map_err(|e| AppError::ConfigError(format!("MONGODB_URI: {}", e)))?;
        options.app_name = Some(APP_NAME.to_string());
        options.connect_timeout = Some(LOOKUP_TIMEOUT);
        options.server_selection_timeout = Some(LOOKUP_TIMEOUT);

        let client = Client::with_options(options).map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&settings.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", settings.database_name);

        Ok(Self {
            client,
            database_name: settings.database_name,
        })
    }

    /// 리포지토리가 컬렉션을 얻을 때 사용합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
