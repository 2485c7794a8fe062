use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use portal_client::app::SITE_TITLE;
use portal_client::{
    FileStorage, HttpContactApi, Layout, NavLink, Notification, Notifier, PortalApp, Route,
    SubmissionOutcome,
};
use portal_shared::config::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "portal",
    version,
    about = "Contact Portal - command-line client"
)]
struct Args {
    /// Contact backend base URL (overrides client.base_url)
    #[arg(long)]
    base_url: Option<String>,

    /// File holding the persisted login flag (overrides client.state_file)
    #[arg(long)]
    state_file: Option<String>,

    /// Log at the configured level instead of warnings only
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show whether the session is logged in
    Status,
    /// Log in with the given credentials
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// End the session
    Logout,
    /// Open a path and print the view it resolves to
    Open { path: String },
    /// Follow a navigation menu link (home, about, services, contact)
    Nav { link: NavLink },
    /// Fill in and submit the contact form
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// List the contact records stored by the backend
    Contacts,
}

/// Shows notifications on stderr.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("alert: {}", notification);
    }
}

type CliApp = PortalApp<FileStorage, HttpContactApi, StderrNotifier>;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if !args.verbose {
        config.telemetry.filter = "warn".to_string();
    }
    let _guard = portal_shared::telemetry::init_telemetry(&config.telemetry);

    if let Some(base_url) = args.base_url {
        config.client.base_url = base_url;
    }
    if let Some(state_file) = args.state_file {
        config.client.state_file = state_file;
    }
    debug!("Using backend {} and state file {}", config.client.base_url, config.client.state_file);

    let api = HttpContactApi::new(&config.client).context("failed to build HTTP client")?;
    let mut app = PortalApp::new(FileStorage::new(&config.client.state_file), api, StderrNotifier);

    let ok = run(&mut app, args.command).await?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Executes one command; `Ok(false)` means it ran but did not succeed.
async fn run(app: &mut CliApp, command: Command) -> Result<bool> {
    match command {
        Command::Status => {
            app.start(Route::Login.path());
            let state = if app.session().is_logged_in() { "logged in" } else { "logged out" };
            println!("{}", state);
        }
        Command::Login { username, password } => {
            app.start(Route::Login.path());
            if app.session().is_logged_in() {
                println!("already logged in");
                print_view(app.location(), app.layout());
                return Ok(true);
            }

            app.session_mut().set_username(username);
            app.session_mut().set_password(password);
            if !app.login()? {
                return Ok(false);
            }
            print_view(app.location(), app.layout());
        }
        Command::Logout => {
            app.start(Route::Login.path());
            app.logout()?;
            print_view(app.location(), app.layout());
        }
        Command::Open { path } => {
            let route = app.start(&path);
            print_view(route, app.layout());
        }
        Command::Nav { link } => {
            app.start(Route::Login.path());
            let route = app.follow_link(link);
            print_view(route, app.layout());
        }
        Command::Submit { name, email, message } => {
            if app.start(Route::ContactForm.path()) != Route::ContactForm {
                eprintln!("login required before submitting the contact form");
                print_view(app.location(), app.layout());
                return Ok(false);
            }

            app.session_mut().set_name(name);
            app.session_mut().set_email(email);
            app.session_mut().set_message(message);
            match app.submit_contact().await {
                SubmissionOutcome::Submitted(record) => println!("stored contact {}", record.id),
                SubmissionOutcome::Failed | SubmissionOutcome::FormNotShown => return Ok(false),
            }
        }
        Command::Contacts => {
            let records = app.list_contacts().await?;
            if records.is_empty() {
                println!("no contacts stored");
            }
            for record in records {
                println!("{}\t{}\t{}\t{}", record.id, record.name, record.email, record.message);
            }
        }
    }

    Ok(true)
}

fn print_view(route: Route, layout: Layout) {
    if layout.show_header {
        println!("== {} ==", SITE_TITLE);
    }

    let page = route.page();
    println!("[{}] {}", route.path(), page.heading);
    if let Some(body) = page.body {
        println!("{}", body);
    }
    if let Some(link) = page.link {
        println!("-> {} ({})", link.text, link.to.path());
    }

    if layout.show_navigation {
        println!("menu: {}", NavLink::ALL.map(|l| l.label()).join(" | "));
    }
    if layout.show_logout {
        println!("(logout available)");
    }
}
