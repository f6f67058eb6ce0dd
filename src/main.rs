#[cfg(feature = "cli")]
mod cli {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::{Parser, Subcommand};
    use ideaboard::api::applications::{applications_for_idea, submit_application};
    use ideaboard::api::dashboard::load_dashboard;
    use ideaboard::api::ideas::{get_idea, open_idea, submit_idea};
    use ideaboard::api::search::browse_ideas;
    use ideaboard::config::AppConfig;
    use ideaboard::demo_seeder::seed_demo_data;
    use ideaboard::models::application_draft::ApplicationDraft;
    use ideaboard::models::idea_draft::IdeaDraft;
    use ideaboard::search::filter::IdeaQuery;
    use ideaboard::utils::format_date;
    use ideaboard::{AuthService, FileBackend, Idea, RecordStore, Session};

    /// Post project ideas, find collaborators and apply to ideas.
    #[derive(Debug, Parser)]
    #[command(name = "ideaboard", version)]
    pub struct Cli {
        /// Configuration file (defaults to ./ideaboard.toml if present)
        #[arg(long, global = true)]
        config: Option<PathBuf>,

        /// Data directory, overrides the configured one
        #[arg(long, global = true)]
        data_dir: Option<PathBuf>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Insert the demo ideas and user if there are no ideas yet
        Seed,
        /// List ideas, optionally filtered
        Ideas {
            #[arg(long, default_value = "")]
            search: String,
            #[arg(long, default_value = "")]
            category: String,
        },
        /// Show one idea and select it as the current idea
        Idea { id: String },
        /// Create an account and log in
        Signup {
            #[arg(long)]
            name: String,
            #[arg(long)]
            email: String,
            #[arg(long)]
            password: String,
        },
        /// Log in with email and password
        Login {
            #[arg(long)]
            email: String,
            #[arg(long)]
            password: String,
        },
        /// Log out
        Logout,
        /// Show the logged-in user
        Whoami,
        /// Post a new idea as the logged-in user
        PostIdea {
            #[arg(long)]
            title: String,
            #[arg(long = "short")]
            short_description: String,
            #[arg(long = "long")]
            long_description: String,
            #[arg(long)]
            category: String,
            #[arg(long = "time")]
            time_required: String,
            #[arg(long)]
            paid: bool,
            #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
            members: i64,
            /// Repeat for each profession needed
            #[arg(long = "profession")]
            professions: Vec<String>,
        },
        /// Apply to an idea as the logged-in user
        Apply {
            idea_id: String,
            #[arg(long)]
            cover_letter: String,
            /// Path or URL of the CV
            #[arg(long)]
            cv: String,
            /// Defaults to the account name
            #[arg(long)]
            name: Option<String>,
            /// Defaults to the account email
            #[arg(long)]
            email: Option<String>,
        },
        /// Show your ideas and applications
        Dashboard,
        /// Delete all stored data
        Reset,
    }

    pub fn run() -> anyhow::Result<()> {
        let cli = Cli::parse();

        let mut config =
            AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
        if let Some(dir) = cli.data_dir {
            config.data_dir = dir;
        }

        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| config.log_filter.clone().into()),
            )
            .with_writer(std::io::stderr)
            .init();

        tracing::debug!("Using data directory {}", config.data_dir.display());

        let store = RecordStore::new(FileBackend::new(&config.data_dir));
        if config.seed_demo && !matches!(cli.command, Command::Seed | Command::Reset) {
            seed_demo_data(&store)?;
        }

        let auth = AuthService::new(&store);
        let session = auth.restore()?.session().cloned();

        match cli.command {
            Command::Seed => {
                if seed_demo_data(&store)? {
                    println!("Demo data inserted.");
                } else {
                    println!("Ideas already present, nothing to do.");
                }
            }
            Command::Ideas { search, category } => {
                let listing = browse_ideas(&store, &IdeaQuery::new(search, category))?;
                if listing.ideas.is_empty() {
                    println!("No ideas found.");
                }
                for idea in &listing.ideas {
                    print_idea_line(idea);
                }
                if !listing.categories.is_empty() {
                    println!("\nCategories: {}", listing.categories.join(", "));
                }
            }
            Command::Idea { id } => {
                let idea = get_idea(&store, &id)?;
                open_idea(&store, &idea.id)?;
                print_idea(&idea);
                let applications = applications_for_idea(&store, &idea.id)?;
                println!("Applications: {}", applications.len());
            }
            Command::Signup {
                name,
                email,
                password,
            } => {
                let session = auth.signup(&name, &email, &password)?;
                println!("Welcome, {}!", session.name);
            }
            Command::Login { email, password } => {
                let session = auth.login(&email, &password)?;
                println!("Logged in as {} <{}>.", session.name, session.email);
            }
            Command::Logout => {
                auth.logout()?;
                println!("Logged out.");
            }
            Command::Whoami => match &session {
                Some(session) => {
                    println!("{} <{}> ({})", session.name, session.email, session.user_id)
                }
                None => println!("Not logged in."),
            },
            Command::PostIdea {
                title,
                short_description,
                long_description,
                category,
                time_required,
                paid,
                members,
                professions,
            } => {
                let mut draft = IdeaDraft {
                    title,
                    short_description,
                    long_description,
                    category,
                    time_required,
                    is_paid: paid,
                    members_needed: members,
                    ..IdeaDraft::default()
                };
                for profession in &professions {
                    draft.add_profession(profession);
                }
                let idea = submit_idea(&store, session.as_ref(), draft)?;
                println!("Posted idea {}.", idea.id);
            }
            Command::Apply {
                idea_id,
                cover_letter,
                cv,
                name,
                email,
            } => {
                let mut draft = session
                    .as_ref()
                    .map(ApplicationDraft::for_session)
                    .unwrap_or_default();
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(email) = email {
                    draft.email = email;
                }
                draft.cover_letter = cover_letter;
                draft.cv_url = Some(cv);

                let application = submit_application(&store, session.as_ref(), &idea_id, draft)?;
                println!("Application {} sent.", application.id);
            }
            Command::Dashboard => {
                let session = require_session(session.as_ref())?;
                let dashboard = load_dashboard(&store, session)?;

                println!("My ideas ({}):", dashboard.my_ideas.len());
                for idea in &dashboard.my_ideas {
                    print_idea_line(idea);
                }
                println!("\nSent applications ({}):", dashboard.sent_applications.len());
                for application in &dashboard.sent_applications {
                    println!(
                        "  {} -> idea {} ({})",
                        application.id,
                        application.idea_id,
                        format_date(&application.created_at)
                    );
                }
                println!(
                    "\nReceived applications ({}):",
                    dashboard.received_applications.len()
                );
                for application in &dashboard.received_applications {
                    println!(
                        "  {} <{}> for idea {} ({})",
                        application.name,
                        application.email,
                        application.idea_id,
                        format_date(&application.created_at)
                    );
                }
            }
            Command::Reset => {
                let removed = store.reset()?;
                println!("All data removed ({} keys).", removed);
            }
        }

        Ok(())
    }

    fn require_session(session: Option<&Session>) -> anyhow::Result<&Session> {
        session.context("Not logged in")
    }

    fn print_idea_line(idea: &Idea) {
        println!(
            "[{}] {} ({}, {}){}",
            idea.id,
            idea.title,
            idea.category,
            idea.time_required,
            if idea.is_paid { " paid" } else { "" }
        );
    }

    fn print_idea(idea: &Idea) {
        println!("{}", idea.title);
        println!("{}\n", idea.short_description);
        println!("{}\n", idea.long_description);
        println!("Category:       {}", idea.category);
        println!("Time required:  {}", idea.time_required);
        println!("Paid:           {}", if idea.is_paid { "yes" } else { "no" });
        println!("Members needed: {}", idea.members_needed);
        println!("Looking for:    {}", idea.professions.join(", "));
        println!("Posted:         {}", format_date(&idea.created_at));
    }
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    cli::run()
}

// Without the `cli` feature (e.g. the WASM build) there's no binary to run.
// The browser entry point is lib.rs::hydrate().
#[cfg(not(feature = "cli"))]
fn main() {}
