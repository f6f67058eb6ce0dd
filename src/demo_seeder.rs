use crate::db::models::{Idea, User};
use crate::db::repository::IdeaRepository;
use crate::db::user_repository::UserRepository;
use crate::error::AppError;
use crate::utils::now_timestamp;

/// Owner of every demo idea.
pub const DEMO_USER_ID: &str = "demo";

/// Built-in demo idea definition.
struct DemoIdea {
    id: &'static str,
    title: &'static str,
    short_description: &'static str,
    long_description: &'static str,
    professions: &'static [&'static str],
    category: &'static str,
    time_required: &'static str,
    is_paid: bool,
    members_needed: i64,
}

const DEMO_IDEAS: &[DemoIdea] = &[
    DemoIdea {
        id: "1",
        title: "Mobile App for Local Farmers",
        short_description: "Connect farmers directly with consumers through a mobile marketplace",
        long_description: "This app will eliminate middlemen by providing a platform where local \
            farmers can list their produce and consumers can order directly. Features include \
            inventory management, order processing, and delivery tracking.",
        professions: &["Mobile Developer", "UI/UX Designer", "Product Manager"],
        category: "Mobile App",
        time_required: "3-6 months",
        is_paid: true,
        members_needed: 4,
    },
    DemoIdea {
        id: "2",
        title: "AI-Powered Resume Builder",
        short_description: "Use AI to create tailored resumes for specific job applications",
        long_description: "This web application will analyze job descriptions and user skills to \
            automatically generate optimized resumes. The system will learn from successful \
            applications to improve suggestions over time.",
        professions: &["AI Engineer", "Frontend Developer", "UX Researcher"],
        category: "Web App",
        time_required: "2-4 months",
        is_paid: false,
        members_needed: 3,
    },
    DemoIdea {
        id: "3",
        title: "VR Educational Platform",
        short_description: "Create immersive learning experiences through virtual reality",
        long_description: "This VR platform will provide educational content across various \
            subjects in an immersive environment. Users can interact with 3D models, participate \
            in simulations, and attend virtual lectures.",
        professions: &["VR Developer", "3D Artist", "Educational Content Creator"],
        category: "Virtual Reality",
        time_required: "6-12 months",
        is_paid: true,
        members_needed: 5,
    },
];

/// The account that owns the demo ideas.
pub fn demo_user() -> User {
    User {
        id: DEMO_USER_ID.to_string(),
        name: "Demo User".to_string(),
        email: "demo@example.com".to_string(),
        password: "password123".to_string(),
    }
}

/// The three demo ideas, stamped with `created_at`.
pub fn demo_ideas(created_at: &str) -> Vec<Idea> {
    DEMO_IDEAS
        .iter()
        .map(|demo| Idea {
            id: demo.id.to_string(),
            title: demo.title.to_string(),
            short_description: demo.short_description.to_string(),
            long_description: demo.long_description.to_string(),
            professions: demo.professions.iter().map(|p| p.to_string()).collect(),
            category: demo.category.to_string(),
            time_required: demo.time_required.to_string(),
            is_paid: demo.is_paid,
            members_needed: demo.members_needed,
            user_id: DEMO_USER_ID.to_string(),
            created_at: created_at.to_string(),
        })
        .collect()
}

/// Insert the demo ideas and demo user when the idea collection is empty.
///
/// Returns `true` if anything was written. Only emptiness is checked, so a
/// store holding users but no ideas gets the demo user saved over any
/// existing account with id `demo`.
pub fn seed_demo_data<S>(store: &S) -> Result<bool, AppError>
where
    S: IdeaRepository + UserRepository,
{
    if !store.list_ideas()?.is_empty() {
        tracing::debug!("Ideas already present, skipping demo data.");
        return Ok(false);
    }

    tracing::info!("Starting demo data seeding...");

    let created_at = now_timestamp();
    for idea in demo_ideas(&created_at) {
        tracing::info!("Inserting demo idea '{}'.", idea.title);
        store.save_idea(idea)?;
    }
    store.save_user(demo_user())?;

    tracing::info!("Demo data seeding completed.");
    Ok(true)
}
