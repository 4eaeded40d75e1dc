use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;

use captcha_backend::{
    config::Config,
    handlers,
    middlewares::create_cors,
    services::CaptchaService,
    store::MemoryCodeStore,
    swagger::swagger_config,
    utils::SystemClock,
};

fn init_logger() {
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
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logger();

    // 加载配置
    let config = match Config::from_toml() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // 验证码存储仅在进程内存中，重启即丢失
    let store = Arc::new(MemoryCodeStore::new());
    let captcha_service = CaptchaService::new(&config.captcha, store, Arc::new(SystemClock));

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(captcha_service.clone()))
            .configure(swagger_config)
            .service(web::scope("/api").configure(handlers::captcha_config))
    })
    .bind((config.server.host.as_str(), config.server.port));

    let server = match server {
        Ok(server) => server,
        Err(e) => {
            log::error!(
                "Server failed to bind {}:{}: {e}",
                config.server.host,
                config.server.port
            );
            return Err(e);
        }
    };

    server.run().await
}
