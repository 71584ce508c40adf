//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderValue, VARY};
use actix_web::{web, Error, HttpMessage, HttpResponse, ResponseError};
use chrono::Utc;
use futures_util::future::LocalBoxFuture;
use crate::services::auth::AuthGate;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let Some(gate) = req.app_data::<web::Data<AuthGate>>().cloned() else {
                log::error!("AuthGate가 app_data에 등록되지 않음");
                let (req, _) = req.into_parts();
                let res = ServiceResponse::new(req, HttpResponse::InternalServerError().finish())
                    .map_into_right_body();
                return Ok(res);
            };

            let mut res = match gate.require_access(req.headers(), Utc::now()) {
                Ok(claims) => {
                    log::debug!("인증 성공: 사용자 ID {}", claims.sub);
                    req.extensions_mut().insert(claims);

                    service.call(req).await?.map_into_left_body()
                }
                Err(err) => {
                    log::warn!("인증 실패 - {} {}: {}", req.method(), req.path(), err);
                    let (req, _) = req.into_parts();

                    ServiceResponse::new(req, err.error_response()).map_into_right_body()
                }
            };

            // 응답이 Authorization 헤더에 따라 달라짐
            res.headers_mut().insert(VARY, HeaderValue::from_static("Authorization"));
            Ok(res)
        })
    }
}
