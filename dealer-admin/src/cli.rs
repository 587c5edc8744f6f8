use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dealer-admin",
    version,
    about = "Administración del catálogo del concesionario"
)]
pub struct Cli {
    /// Backend base URL (overrides API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file (overrides DEALER_ADMIN_SESSION)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Manage brands (marcas)
    #[command(subcommand)]
    Brands(NamedAction),
    /// Manage models (modelos)
    #[command(subcommand)]
    Models(ModelAction),
    /// Manage vehicle states (estados)
    #[command(subcommand)]
    States(NamedAction),
    /// Manage vehicles (vehículos)
    #[command(subcommand)]
    Vehicles(VehicleAction),
}

#[derive(Subcommand, Debug)]
pub enum NamedAction {
    List,
    Create {
        #[arg(long)]
        name: String,
    },
    Edit {
        id: i64,
        #[arg(long)]
        name: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct ModelFields {
    #[arg(long)]
    pub name: String,
    /// Brand id
    #[arg(long)]
    pub brand: String,
}

#[derive(Subcommand, Debug)]
pub enum ModelAction {
    List,
    Create(ModelFields),
    Edit {
        id: i64,
        #[command(flatten)]
        fields: ModelFields,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug)]
pub struct VehicleFields {
    /// Brand id
    #[arg(long)]
    pub brand: String,
    /// Model id
    #[arg(long)]
    pub model: String,
    /// State id
    #[arg(long)]
    pub state: String,
    #[arg(long)]
    pub year: String,
    #[arg(long)]
    pub price: String,
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Subcommand, Debug)]
pub enum VehicleAction {
    List,
    Create(VehicleFields),
    Edit {
        id: i64,
        #[command(flatten)]
        fields: VehicleFields,
    },
    Delete {
        id: i64,
    },
}
