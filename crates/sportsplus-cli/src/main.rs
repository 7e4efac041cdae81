use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use dotenvy::dotenv;
use sportsplus_cli::seeder::{self, SeedConfig};
use sportsplus_db::{DatabaseConfig, PgPool, close_db_pool, init_db_pool};

#[derive(Parser)]
#[command(name = "sportsplus-cli")]
#[command(about = "Sports Plus CLI - Administrative tools for Sports Plus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grant the admin role to an existing account
    PromoteAdmin {
        /// Email address of the account
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Seed the database with fake instructors, classes and students
    Seed {
        /// Number of instructors to create
        #[arg(short = 'i', long, default_value = "5")]
        instructors: usize,

        /// Number of classes per instructor
        #[arg(short = 'c', long, default_value = "3")]
        classes: usize,

        /// Number of students to create
        #[arg(short = 's', long, default_value = "40")]
        students: usize,

        /// Number of cart selections per student
        #[arg(long, default_value = "2")]
        selections: usize,
    },
    /// Clear all seeded data (keeps admins)
    ClearSeed {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&config).await?;

    let result = match cli.command {
        Commands::PromoteAdmin { email } => handle_promote_admin(&pool, email).await,
        Commands::Seed {
            instructors,
            classes,
            students,
            selections,
        } => {
            let config = SeedConfig::default()
                .with_instructors(instructors)
                .with_classes_per_instructor(classes)
                .with_students(students)
                .with_selections(selections);
            handle_seed(&pool, &config).await
        }
        Commands::ClearSeed { yes } => handle_clear_seed(&pool, yes).await,
    };

    close_db_pool(pool).await;

    if let Err(e) = result {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn handle_promote_admin(pool: &PgPool, email: Option<String>) -> anyhow::Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    if !seeder::promote_admin(pool, &email).await? {
        anyhow::bail!("No user found with email {}", email);
    }

    println!("\n✅ {} is now an admin", email);
    Ok(())
}

async fn handle_seed(pool: &PgPool, config: &SeedConfig) -> anyhow::Result<()> {
    seeder::seed_all(pool, config)
        .await
        .map_err(|e| anyhow::anyhow!("Error seeding database: {}", e))
}

async fn handle_clear_seed(pool: &PgPool, yes: bool) -> anyhow::Result<()> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt("Delete all seeded users, classes, carts and payments?")
            .default(false)
            .interact()?;

    if !confirmed {
        println!("Aborted");
        return Ok(());
    }

    seeder::clear_all(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Error clearing seeded data: {}", e))
}
