use crate::cli::commands::open_pool;
use crate::cli::parser::{UserAttrCmd, UserCmd};
use crate::config::Config;
use crate::core::attribute::AttributeLogic;
use crate::core::user::UserLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &UserCmd, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match cmd {
        UserCmd::Add { cd, name, email } => {
            let id = UserLogic::add(&mut pool, cd, name, email)?;
            success(format!("User '{cd}' added (id {id})."));
        }

        UserCmd::List { active } => {
            let users = UserLogic::list(&mut pool, *active)?;
            if users.is_empty() {
                info("No users found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Code"),
                Column::left("Name"),
                Column::left("Email"),
                Column::left("State"),
            ]);
            for u in users {
                let state = u.state_label().to_string();
                table.add_row(vec![u.id.to_string(), u.cd, u.name, u.email, state]);
            }
            print!("{}", table.render());
        }

        UserCmd::Edit { user, name, email } => {
            let u = UserLogic::edit(&mut pool, user, name.as_deref(), email.as_deref())?;
            success(format!("User '{}' updated: {}", u.cd, u.name));
        }

        UserCmd::Del { user, force } => {
            let prompt = format!(
                "Delete user '{user}' with all their work logs? This action is irreversible."
            );
            if !*force && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
            let u = UserLogic::delete(&mut pool, user)?;
            success(format!("User '{}' has been deleted.", u.cd));
        }

        UserCmd::Activate { user } => {
            let u = UserLogic::set_active(&mut pool, user, true)?;
            success(format!("User '{}' is now active.", u.cd));
        }

        UserCmd::Deactivate { user } => {
            let u = UserLogic::set_active(&mut pool, user, false)?;
            success(format!("User '{}' is now inactive.", u.cd));
        }

        UserCmd::Attr(UserAttrCmd::List { user }) => {
            let attrs = AttributeLogic::of_user(&mut pool, user)?;
            if attrs.is_empty() {
                info(format!("User '{user}' has no attributes."));
                return Ok(());
            }

            let mut table = Table::new(vec![Column::left("Attribute"), Column::left("Value")]);
            for a in attrs {
                table.add_row(vec![
                    format!("{} ({})", a.type_name, a.type_code),
                    format!("{} ({})", a.option_name, a.option_code),
                ]);
            }
            print!("{}", table.render());
        }

        UserCmd::Attr(UserAttrCmd::Set {
            user,
            type_code,
            option,
        }) => match AttributeLogic::set_for_user(&mut pool, user, type_code, option.as_deref())? {
            Some(o) => success(format!("User '{user}' {type_code}: {} ({})", o.name, o.code)),
            None => success(format!("Attribute '{type_code}' of user '{user}' cleared.")),
        },
    }

    Ok(())
}
