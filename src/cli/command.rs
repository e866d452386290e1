use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "contactctl", version, about = "Contact book over a remote REST collection")]
pub struct Cli {
    /// Base URL of the remote contact collection
    #[arg(long, env = "REMOTE_STORE_URL")]
    pub base_url: Option<String>,

    /// Store backend (remote, mem) are available
    #[arg(long, env = "STORE_CHOICE", default_value_t = String::from("remote"))]
    pub store: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts
    List,

    /// Add a new contact
    Add {
        /// Contact name (letters only; anything else is dropped)
        #[arg(long)]
        name: String,

        /// Contact phone number (digits only; anything else is dropped)
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Edit an existing contact
    /// Provide the contact id followed by the fields to change;
    /// omitted fields keep their current values
    Edit {
        /// Id of the contact to edit
        #[arg(long)]
        id: u64,

        /// Update name
        #[arg(long)]
        name: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Update email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete
        #[arg(long)]
        id: u64,
    },
}
