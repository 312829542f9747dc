pub mod admin;
pub mod auth;
pub mod envelope;
pub mod faculty;
pub mod gateway;
pub mod registrar;
pub mod student;
pub mod transport;

pub use admin::AdminApi;
pub use auth::{AuthApi, Credentials, LoginGrant};
pub use faculty::FacultyApi;
pub use gateway::{ApiGateway, RequestOptions};
pub use registrar::RegistrarApi;
pub use student::StudentApi;
pub use transport::{ApiRequest, HttpTransport, RawResponse, Transport, TransportError};

use crate::config::ApiConfig;
use crate::error::ArmsResult;

/// Every endpoint family, sharing one gateway
#[derive(Clone)]
pub struct ArmsApi {
    pub auth: AuthApi,
    pub registrar: RegistrarApi,
    pub faculty: FacultyApi,
    pub admin: AdminApi,
    pub student: StudentApi,
}

impl ArmsApi {
    pub fn new(gateway: ApiGateway) -> Self {
        Self {
            auth: AuthApi::new(gateway.clone()),
            registrar: RegistrarApi::new(gateway.clone()),
            faculty: FacultyApi::new(gateway.clone()),
            admin: AdminApi::new(gateway.clone()),
            student: StudentApi::new(gateway),
        }
    }

    pub fn http(config: &ApiConfig) -> ArmsResult<Self> {
        Ok(Self::new(ApiGateway::http(config)?))
    }
}
