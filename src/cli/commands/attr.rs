use crate::cli::commands::open_pool;
use crate::cli::parser::{AttrCmd, AttrOptionCmd, AttrTypeCmd};
use crate::config::Config;
use crate::core::attribute::{AttributeEdit, AttributeLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &AttrCmd, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match cmd {
        AttrCmd::Type(cmd) => handle_type(cmd, &mut pool),
        AttrCmd::Option(cmd) => handle_option(cmd, &mut pool),
    }
}

fn handle_type(cmd: &AttrTypeCmd, pool: &mut DbPool) -> AppResult<()> {
    match cmd {
        AttrTypeCmd::List => {
            let types = AttributeLogic::list_types(pool)?;
            if types.is_empty() {
                info("No attribute types defined.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Code"),
                Column::left("Name"),
                Column::right("Order"),
                Column::right("Options"),
            ]);
            for t in types {
                table.add_row(vec![
                    t.id.to_string(),
                    t.code,
                    t.name,
                    t.sort_order.to_string(),
                    t.option_count.to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        AttrTypeCmd::Add {
            code,
            name,
            sort_order,
        } => {
            let id = AttributeLogic::add_type(pool, code, name, *sort_order)?;
            success(format!("Attribute type '{code}' added (id {id})."));
        }

        AttrTypeCmd::Edit {
            code,
            new_code,
            name,
            sort_order,
        } => {
            let edit = AttributeEdit {
                code: new_code.as_deref(),
                name: name.as_deref(),
                sort_order: *sort_order,
            };
            let t = AttributeLogic::edit_type(pool, code, edit)?;
            success(format!("Attribute type '{}' updated: {}", t.code, t.name));
        }

        AttrTypeCmd::Del { code } => {
            AttributeLogic::delete_type(pool, code)?;
            success(format!("Attribute type '{code}' has been deleted."));
        }
    }

    Ok(())
}

fn handle_option(cmd: &AttrOptionCmd, pool: &mut DbPool) -> AppResult<()> {
    match cmd {
        AttrOptionCmd::List { type_code } => {
            let options = AttributeLogic::list_options(pool, type_code)?;
            if options.is_empty() {
                info(format!("No options for attribute type '{type_code}'."));
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Code"),
                Column::left("Name"),
                Column::right("Order"),
            ]);
            for o in options {
                table.add_row(vec![
                    o.id.to_string(),
                    o.code,
                    o.name,
                    o.sort_order.to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        AttrOptionCmd::Add {
            type_code,
            code,
            name,
            sort_order,
        } => {
            let id = AttributeLogic::add_option(pool, type_code, code, name, *sort_order)?;
            success(format!("Option '{code}' added to '{type_code}' (id {id})."));
        }

        AttrOptionCmd::Edit {
            type_code,
            code,
            new_code,
            name,
            sort_order,
        } => {
            let edit = AttributeEdit {
                code: new_code.as_deref(),
                name: name.as_deref(),
                sort_order: *sort_order,
            };
            let o = AttributeLogic::edit_option(pool, type_code, code, edit)?;
            success(format!("Option '{type_code}/{}' updated: {}", o.code, o.name));
        }

        AttrOptionCmd::Del { type_code, code } => {
            AttributeLogic::delete_option(pool, type_code, code)?;
            success(format!("Option '{type_code}/{code}' has been deleted."));
        }
    }

    Ok(())
}
