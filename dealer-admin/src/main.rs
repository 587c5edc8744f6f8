mod cli;

use clap::Parser;
use cli::{Cli, Command, ModelAction, ModelFields, NamedAction, VehicleAction, VehicleFields};
use dealer_admin::resources::{Brand, Model, State, Vehicle};
use dealer_admin::session::{FileTokenStore, SessionContext};
use dealer_admin::{
    AdminConfig, AdminError, ApiClient, BrandForm, FormController, FormFields, FormState,
    LoginController, ModelForm, RecordingNavigator, Resource, Route, StateForm, VehicleForm,
    require_session,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = match AdminConfig::resolve(cli.api_url.as_deref(), cli.session_file.clone()) {
        Ok(config) => config,
        Err(err) => return fail(&err),
    };
    tracing::debug!(
        api_url = config.api_url(),
        session = %config.session_file().display(),
        "Configured"
    );

    let session = SessionContext::new(FileTokenStore::new(config.session_file()));
    let client = ApiClient::from_config(&config, session);
    let navigator = RecordingNavigator::new();

    run(cli.command, &client, &navigator).await
}

async fn run(command: Command, client: &ApiClient, navigator: &RecordingNavigator) -> ExitCode {
    match command {
        Command::Login { username, password } => login(client, navigator, username, password).await,
        Command::Logout => match client.session().end() {
            Ok(()) => {
                println!("Sesión cerrada");
                ExitCode::SUCCESS
            }
            Err(err) => fail(&err),
        },
        Command::Brands(action) => {
            run_named::<BrandForm>(action, client, navigator, |fields, name| {
                fields.name = name;
            })
            .await
        }
        Command::States(action) => {
            run_named::<StateForm>(action, client, navigator, |fields, name| {
                fields.name = name;
            })
            .await
        }
        Command::Models(action) => match action {
            ModelAction::List => list::<Model>(client, navigator).await,
            ModelAction::Create(fields) => {
                save(FormController::new(), client, navigator, fill_model(fields)).await
            }
            ModelAction::Edit { id, fields } => {
                save(FormController::for_existing(id), client, navigator, fill_model(fields)).await
            }
            ModelAction::Delete { id } => delete::<Model>(client, navigator, id).await,
        },
        Command::Vehicles(action) => match action {
            VehicleAction::List => list::<Vehicle>(client, navigator).await,
            VehicleAction::Create(fields) => {
                save(FormController::new(), client, navigator, fill_vehicle(fields)).await
            }
            VehicleAction::Edit { id, fields } => {
                let form = FormController::for_existing(id);
                save(form, client, navigator, fill_vehicle(fields)).await
            }
            VehicleAction::Delete { id } => delete::<Vehicle>(client, navigator, id).await,
        },
    }
}

async fn login(
    client: &ApiClient,
    navigator: &RecordingNavigator,
    username: String,
    password: String,
) -> ExitCode {
    let mut form = LoginController::new();
    form.fields_mut().username = username;
    form.fields_mut().password = password;
    match form.submit(client, navigator).await.clone() {
        FormState::Success(route) => {
            println!("Sesión iniciada");
            render(route, client, navigator).await
        }
        state => report(&state),
    }
}

async fn run_named<F: FormFields>(
    action: NamedAction,
    client: &ApiClient,
    navigator: &RecordingNavigator,
    set_name: fn(&mut F, String),
) -> ExitCode {
    match action {
        NamedAction::List => list::<F::Resource>(client, navigator).await,
        NamedAction::Create { name } => {
            save(FormController::<F>::new(), client, navigator, |form| {
                set_name(form.fields_mut(), name);
            })
            .await
        }
        NamedAction::Edit { id, name } => {
            save(FormController::<F>::for_existing(id), client, navigator, |form| {
                set_name(form.fields_mut(), name);
            })
            .await
        }
        NamedAction::Delete { id } => delete::<F::Resource>(client, navigator, id).await,
    }
}

fn fill_model(fields: ModelFields) -> impl FnOnce(&mut FormController<ModelForm>) {
    move |form| {
        form.fields_mut().name = fields.name;
        form.select_brand(&fields.brand);
    }
}

fn fill_vehicle(fields: VehicleFields) -> impl FnOnce(&mut FormController<VehicleForm>) {
    move |form| {
        form.select_brand(&fields.brand);
        form.select_model(&fields.model);
        form.select_state(&fields.state);
        let inputs = form.fields_mut();
        inputs.year = fields.year;
        inputs.price = fields.price;
        inputs.description = fields.description;
    }
}

/// Mount, fill, submit, and on success show the listing navigated to
async fn save<F: FormFields>(
    mut form: FormController<F>,
    client: &ApiClient,
    navigator: &RecordingNavigator,
    fill: impl FnOnce(&mut FormController<F>),
) -> ExitCode {
    if !form.mount(client, navigator).await {
        return not_logged_in();
    }
    if let Some(message) = form.error() {
        eprintln!("{message}");
    }

    fill(&mut form);
    match form.submit(client, navigator).await.clone() {
        FormState::Success(route) => {
            println!("{} guardado", capitalize(F::Resource::RESOURCE_NAME_SINGULAR));
            render(route, client, navigator).await
        }
        state => report(&state),
    }
}

async fn render(route: Route, client: &ApiClient, navigator: &RecordingNavigator) -> ExitCode {
    match route {
        Route::Brands => list::<Brand>(client, navigator).await,
        Route::Models => list::<Model>(client, navigator).await,
        Route::States => list::<State>(client, navigator).await,
        Route::Vehicles => list::<Vehicle>(client, navigator).await,
        Route::Dashboard | Route::Login => {
            println!("→ {route}");
            ExitCode::SUCCESS
        }
    }
}

async fn list<R: Resource>(client: &ApiClient, navigator: &RecordingNavigator) -> ExitCode {
    if require_session(client.session(), navigator).is_none() {
        return not_logged_in();
    }
    match client.list::<R>().await {
        Ok(items) if items.is_empty() => {
            println!("No hay {} registrados", R::RESOURCE_NAME_PLURAL);
            ExitCode::SUCCESS
        }
        Ok(items) => {
            println!("{}:", capitalize(R::RESOURCE_NAME_PLURAL));
            for item in &items {
                println!("{:>6}  {}", item.id(), item.label());
            }
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

async fn delete<R: Resource>(
    client: &ApiClient,
    navigator: &RecordingNavigator,
    id: i64,
) -> ExitCode {
    if require_session(client.session(), navigator).is_none() {
        return not_logged_in();
    }
    match client.delete::<R>(id).await {
        Ok(()) => {
            println!("{} {id} eliminado", capitalize(R::RESOURCE_NAME_SINGULAR));
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

fn report(state: &FormState) -> ExitCode {
    match state {
        FormState::Invalid(errors) => {
            for error in errors.errors() {
                eprintln!("{error}");
            }
        }
        other => eprintln!("{}", other.error_message().unwrap_or_default()),
    }
    ExitCode::FAILURE
}

fn fail(err: &AdminError) -> ExitCode {
    err.log_internal();
    eprintln!("{err}");
    ExitCode::FAILURE
}

fn not_logged_in() -> ExitCode {
    eprintln!("Sesión no iniciada: ejecute `dealer-admin login`");
    ExitCode::FAILURE
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
