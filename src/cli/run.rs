use clap::Parser;

use super::command::{Cli, Commands};
use crate::domain::controller::{Action, Controller, Field};
use crate::domain::state::AppState;
use crate::errors::AppError;
use crate::storage::{parse_store, StoreChoice};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let store = parse_store(
        Some(StoreChoice::from(&cli.store)?),
        cli.base_url.as_deref(),
    )?;

    println!("Current store backend is: {}", store.get_medium());

    let mut controller = Controller::new(store);

    // The list is populated once up front; a failure here leaves it empty
    // and the command still runs against that last-known state.
    controller.dispatch(Action::Load);

    match cli.command {
        Commands::List => {
            print_contacts(controller.state());
            Ok(())
        }

        Commands::Add { name, phone, email } => {
            controller.dispatch(Action::Input(Field::Name, name));
            controller.dispatch(Action::Input(Field::Phone, phone));
            controller.dispatch(Action::Input(Field::Email, email.unwrap_or_default()));
            controller.dispatch(Action::Submit);

            print_contacts(controller.state());
            Ok(())
        }

        Commands::Edit {
            id,
            name,
            phone,
            email,
        } => {
            controller.dispatch(Action::BeginEdit(id));

            if controller.state().editing.is_none() {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                return Ok(());
            }

            // Only the provided fields change; the rest keep the values the
            // edit mirrored into the form.
            if let Some(name) = name {
                controller.dispatch(Action::Input(Field::Name, name));
            }
            if let Some(phone) = phone {
                controller.dispatch(Action::Input(Field::Phone, phone));
            }
            if let Some(email) = email {
                controller.dispatch(Action::Input(Field::Email, email));
            }
            controller.dispatch(Action::Submit);

            print_contacts(controller.state());
            Ok(())
        }

        Commands::Delete { id } => {
            controller.dispatch(Action::Remove(id));

            print_contacts(controller.state());
            Ok(())
        }
    }
}

fn print_contacts(state: &AppState) {
    if state.contacts.is_empty() {
        println!("No contact yet");
        return;
    }

    for (mut i, c) in state.contacts.iter().enumerate() {
        i += 1;
        let id = c.id.map(|v| v.to_string()).unwrap_or_default();
        println!("{i:>3}. [{id:>4}] {:<20} {:15} {:^30}", c.name, c.phone, c.email);
    }
}
