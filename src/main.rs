use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;

use monbillet_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    external::{Notifier, WhatsAppService},
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
    tasks,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().map_err(std::io::Error::other)?;

    // 创建数据库连接并运行迁移
    let pool = create_pool(&config.database)
        .await
        .map_err(std::io::Error::other)?;
    run_migrations(&pool).await.map_err(std::io::Error::other)?;

    if !config.whatsapp.has_api_key() {
        log::warn!("CALLMEBOT_KEY not set, notifications will return wa.me links only");
    }
    let notifier: Arc<dyn Notifier> = Arc::new(WhatsAppService::new(config.whatsapp.clone()));
    let superadmin_phone = config.whatsapp.superadmin_phone.clone();

    let ticket_service = TicketService::new(pool.clone(), notifier.clone(), superadmin_phone.clone());
    let admin_code_service = AdminCodeService::new(pool.clone(), notifier, superadmin_phone);

    // 每日验证码定时任务
    if config.scheduler.enabled {
        let daily_at = config
            .scheduler
            .daily_time()
            .map_err(std::io::Error::other)?;
        tasks::spawn_all(admin_code_service.clone(), daily_at);
    } else {
        log::info!("Daily admin code scheduler disabled");
    }

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(handlers::json_config())
            .app_data(handlers::query_config())
            .app_data(web::Data::new(ticket_service.clone()))
            .app_data(web::Data::new(admin_code_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api")
                    .configure(handlers::ticket_config)
                    .configure(handlers::admin_code_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
