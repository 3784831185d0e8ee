use dotenvy::dotenv;
use herdbook::logging::init_tracing;
use herdbook::router::init_router;
use herdbook::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // Check if this is a CLI command
    if args.len() > 1 && args[1] == "create-superadmin" {
        handle_create_superadmin(args).await;
        return;
    }

    init_tracing();

    let state = init_app_state().await;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Failed to bind to 0.0.0.0:3000");
    println!("🚀 Server running on http://localhost:3000");
    println!("📚 Swagger UI available at http://localhost:3000/swagger-ui");
    println!("📖 Scalar UI available at http://localhost:3000/scalar");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}

async fn handle_create_superadmin(args: Vec<String>) {
    if args.len() != 5 {
        eprintln!("Usage: {} create-superadmin <name> <email> <password>", args[0]);
        std::process::exit(1);
    }

    let name = &args[2];
    let email = &args[3];
    let password = &args[4];

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    match herdbook::cli::create_superadmin(&pool, name, email, password).await {
        Ok(_) => {
            println!("✅ SuperAdmin created successfully!");
            println!("   Email: {}", email);
            println!("   Name: {}", name);
        }
        Err(e) => {
            eprintln!("❌ Error creating SuperAdmin: {}", e);
            std::process::exit(1);
        }
    }
}
