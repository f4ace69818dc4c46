use actix_cors::Cors;

/// 扫码端和管理页面来自不同来源，放开 CORS
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
