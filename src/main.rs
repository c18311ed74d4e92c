//! # PetCare Demo
//!
//! Runs one owner and one admin through the core against the in-memory backend:
//! 1.  Sign up and log in an owner.
//! 2.  Add a pet, log an activity, book an appointment.
//! 3.  Render the owner's dashboard.
//! 4.  Log in as admin and moderate the pet.
//!
//! The session record is written under `PETCARE_DATA_DIR`.

use petcare::config::AppConfig;
use petcare::lifecycle::{setup_tracing, PetCare};
use petcare::model::{ActivityType, NewActivity, NewPet, Role, Status, User};
use petcare::remote::document::FieldValue;
use petcare::remote::store::USERS;
use petcare::remote::DocumentStore;
use petcare::views::admin_overview::admin_overview;
use petcare::views::dashboard::owner_dashboard;
use petcare::views::forms::{AdminPetForm, AppointmentForm};
use slice_framework::SliceHandle;
use tracing::{error, info, Instrument};

const ADMIN_EMAIL: &str = "admin@petcare.dev";
const ADMIN_PASSWORD: &str = "admin-pass";

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    info!(data_dir = %config.data_dir.display(), "Starting PetCare demo");
    let (app, backend) = PetCare::with_memory_backend(&config).await;

    // Seed an admin account with its profile
    let admin = backend
        .register(ADMIN_EMAIL, ADMIN_PASSWORD, Some("Admin"))
        .await
        .map_err(|e| e.to_string())?;
    let mut profile = User::registration_fields("Admin", ADMIN_EMAIL);
    profile.insert("role".to_string(), FieldValue::from(Role::Admin.as_str()));
    backend
        .set(USERS, &admin.uid, profile)
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("owner");
    async {
        app.session
            .sign_up("Ivy", "i@g.com", "12345678")
            .await
            .map_err(|e| e.to_string())?;
        let user = app
            .session
            .login("i@g.com", "12345678")
            .await
            .map_err(|e| e.to_string())?;
        info!(uid = %user.uid, role = %user.role, "Logged in");

        let pet = app
            .pets
            .add_pet(NewPet::new("Tommy", "Labrador", 3.0, 12.5))
            .await
            .map_err(|e| e.to_string())?;
        app.pets
            .add_activity(NewActivity::new(pet.id.clone(), ActivityType::Walk).with_notes("Morning walk"))
            .await
            .map_err(|e| e.to_string())?;

        let booking = AppointmentForm {
            pet_id: pet.id.clone(),
            date: "2030-05-01".to_string(),
            reason: "Annual checkup".to_string(),
            vet_id: admin.uid.clone(),
            location: "Main Street Clinic".to_string(),
            notes: String::new(),
        }
        .validate()
        .map_err(|e| e.to_string())?;
        app.pets
            .add_appointment(booking)
            .await
            .map_err(|e| e.to_string())?;

        // Dashboard reads: the owner's lists and the account directory for vet names
        let (pets, activities, appointments, directory) = tokio::join!(
            app.pets.fetch_pets(),
            app.pets.fetch_activities(),
            app.pets.fetch_appointments(),
            app.users.fetch_users(),
        );
        for (what, failed) in [
            ("pets", pets.err()),
            ("activities", activities.err()),
            ("appointments", appointments.err()),
            ("users", directory.err()),
        ] {
            if let Some(e) = failed {
                error!(what, error = %e, "Fetch failed");
            }
        }

        let dashboard = owner_dashboard(&app.session.state(), &app.pets.state(), &app.users.state());
        info!(
            greeting = %dashboard.greeting,
            pets = dashboard.pets.items.len(),
            activities = dashboard.activities.items.len(),
            appointments = dashboard.appointments.items.len(),
            "Dashboard ready"
        );

        app.session.logout().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("admin");
    let moderation = async {
        app.session
            .login(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .map_err(|e| e.to_string())?;
        let all_pets = app.admin.fetch_all_pets().await.map_err(|e| e.to_string())?;
        app.admin.fetch_users().await.map_err(|e| e.to_string())?;

        if let Some(pet) = all_pets.first() {
            let edit = AdminPetForm {
                name: pet.name.clone(),
                status: Some(Status::Disabled),
            }
            .validate()
            .map_err(|e| e.to_string())?;
            app.admin.edit_pet(&pet.id, edit).await.map_err(|e| e.to_string())?;
        }

        let overview = admin_overview(&app.admin.state());
        info!(
            users = overview.totals.users,
            pets = overview.totals.pets,
            "Admin overview ready"
        );
        app.session.logout().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await;

    if let Err(e) = moderation {
        error!(error = %e, "Moderation failed");
    }

    app.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
