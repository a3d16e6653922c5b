//! yoga-client - command line front-end for the booking backend

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yoga_client::{
    components::{AppContext, LoginView, MeView, SessionDetailView, SessionListView},
    config::Config,
};

const USAGE: &str = "usage: yoga-client <sessions | session <id> | participate <id> | unparticipate <id> | me | teachers>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Sessions,
    Session(i64),
    Participate(i64),
    Unparticipate(i64),
    Me,
    Teachers,
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        let id = |value: Option<&String>| -> Result<i64> {
            let value = value.context(USAGE)?;
            value
                .parse()
                .with_context(|| format!("Invalid session ID: {}", value))
        };

        let command = match args.first().map(String::as_str) {
            Some("sessions") => Command::Sessions,
            Some("session") => Command::Session(id(args.get(1))?),
            Some("participate") => Command::Participate(id(args.get(1))?),
            Some("unparticipate") => Command::Unparticipate(id(args.get(1))?),
            Some("me") => Command::Me,
            Some("teachers") => Command::Teachers,
            _ => bail!(USAGE),
        };
        Ok(command)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yoga_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!("Using backend {}", config.api.base_url);

    let ctx = AppContext::new(config)?;
    login(&ctx).await?;

    match command {
        Command::Sessions => list_sessions(&ctx).await,
        Command::Session(id) => {
            let view = load_session(&ctx, id).await?;
            print_session(&view);
            Ok(())
        }
        Command::Participate(id) => {
            let mut view = load_session(&ctx, id).await?;
            if !view.controls().participate {
                bail!("Cannot join session {}", id);
            }
            view.participate().await;
            finish(&view)
        }
        Command::Unparticipate(id) => {
            let mut view = load_session(&ctx, id).await?;
            if !view.controls().unparticipate {
                bail!("Not participating in session {}", id);
            }
            view.unparticipate().await;
            finish(&view)
        }
        Command::Me => show_account(&ctx).await,
        Command::Teachers => {
            for teacher in ctx.api.teachers.all().await? {
                println!("{:>4}  {}", teacher.id, teacher.display_name());
            }
            Ok(())
        }
    }
}

async fn login(ctx: &AppContext) -> Result<()> {
    let email = std::env::var("YOGA_EMAIL").context("YOGA_EMAIL is not set")?;
    let password = std::env::var("YOGA_PASSWORD").context("YOGA_PASSWORD is not set")?;

    let mut view = LoginView::new(ctx.clone());
    view.form.set_email(email);
    view.form.set_password(password);

    if view.submit().await.is_none() {
        match view.error_message() {
            Some(message) => bail!("Login failed: {}", message),
            None => bail!("Login failed: invalid email or password"),
        }
    }
    Ok(())
}

async fn list_sessions(ctx: &AppContext) -> Result<()> {
    let mut view = SessionListView::new(ctx.clone());
    view.load().await;
    if let Some(message) = view.error_message() {
        bail!(message);
    }

    for row in view.rows() {
        println!(
            "{:>4}  {}  {}  ({} participants)",
            row.session.id,
            row.session.date.format("%Y-%m-%d"),
            row.session.name,
            row.session.participant_count()
        );
    }
    Ok(())
}

async fn load_session(ctx: &AppContext, id: i64) -> Result<SessionDetailView> {
    let mut view = SessionDetailView::new(ctx.clone(), id);
    view.load().await;
    if let Some(message) = view.error_message() {
        bail!(message);
    }
    Ok(view)
}

fn print_session(view: &SessionDetailView) {
    let Some(session) = view.session() else {
        return;
    };

    println!("{}", session.name);
    println!("  date:         {}", session.date.format("%Y-%m-%d"));
    if let Some(teacher) = view.teacher() {
        println!("  teacher:      {}", teacher.display_name());
    }
    println!("  participants: {}", session.participant_count());
    println!("  description:  {}", session.description);

    let controls = view.controls();
    if controls.participate {
        println!("  you can join this session");
    }
    if controls.unparticipate {
        println!("  you are participating");
    }
}

fn finish(view: &SessionDetailView) -> Result<()> {
    if let Some(message) = view.error_message() {
        bail!(message);
    }
    print_session(view);
    Ok(())
}

async fn show_account(ctx: &AppContext) -> Result<()> {
    let mut view = MeView::new(ctx.clone());
    view.load().await;
    if let Some(message) = view.error_message() {
        bail!(message);
    }

    if let (Some(user), Some(name)) = (view.user(), view.display_name()) {
        println!("{}", name);
        println!("  email: {}", user.email);
        if let Some(badge) = view.admin_badge() {
            println!("  {}", badge);
        }
        println!("  created: {}", user.created_at.format("%Y-%m-%d"));
    }
    Ok(())
}
