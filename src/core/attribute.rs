//! User attribute types, their options, and the option each user holds.

use crate::core::lookup;
use crate::db::log::audit_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::attributes;
use crate::errors::{AppError, AppResult};
use crate::models::user_attribute::{AttributeOption, AttributeType, UserAttribute};
use rusqlite::Connection;

fn attr_type(conn: &Connection, code: &str) -> AppResult<AttributeType> {
    attributes::find_type_by_code(conn, code)?
        .ok_or_else(|| AppError::NotFound(format!("Attribute type '{code}'")))
}

fn attr_option(conn: &Connection, t: &AttributeType, code: &str) -> AppResult<AttributeOption> {
    attributes::find_option(conn, t.id, code)?.ok_or_else(|| {
        AppError::NotFound(format!("Option '{code}' of attribute type '{}'", t.code))
    })
}

/// New values for an edit; `None` keeps the current one.
#[derive(Debug, Default)]
pub struct AttributeEdit<'a> {
    pub code: Option<&'a str>,
    pub name: Option<&'a str>,
    pub sort_order: Option<i64>,
}

pub struct AttributeLogic;

impl AttributeLogic {
    pub fn list_types(pool: &mut DbPool) -> AppResult<Vec<AttributeType>> {
        Ok(attributes::list_types(&pool.conn)?)
    }

    pub fn add_type(pool: &mut DbPool, code: &str, name: &str, sort_order: i64) -> AppResult<i64> {
        let id = attributes::insert_type(&pool.conn, code, name, sort_order)
            .map_err(|e| AppError::from_unique(e, &format!("Attribute type '{code}'")))?;
        audit_log_quiet(&pool.conn, "add", &format!("attribute type {code}"), name);
        Ok(id)
    }

    pub fn edit_type(
        pool: &mut DbPool,
        code: &str,
        edit: AttributeEdit<'_>,
    ) -> AppResult<AttributeType> {
        let current = attr_type(&pool.conn, code)?;
        let new_code = edit.code.unwrap_or(&current.code).to_string();
        let name = edit.name.unwrap_or(&current.name).to_string();
        let sort_order = edit.sort_order.unwrap_or(current.sort_order);

        attributes::update_type(&pool.conn, current.id, &new_code, &name, sort_order)
            .map_err(|e| AppError::from_unique(e, &format!("Attribute type '{new_code}'")))?;
        audit_log_quiet(&pool.conn, "edit", &format!("attribute type {code}"), &name);

        Ok(AttributeType {
            code: new_code,
            name,
            sort_order,
            ..current
        })
    }

    /// Types some user still holds cannot be deleted; their options go
    /// with them otherwise.
    pub fn delete_type(pool: &mut DbPool, code: &str) -> AppResult<()> {
        let t = attr_type(&pool.conn, code)?;
        if attributes::type_in_use(&pool.conn, t.id)? {
            return Err(AppError::Validation(format!(
                "Attribute type '{code}' is in use by at least one user"
            )));
        }

        attributes::delete_type(&pool.conn, t.id)?;
        audit_log_quiet(&pool.conn, "del", &format!("attribute type {code}"), &t.name);
        Ok(())
    }

    pub fn list_options(pool: &mut DbPool, type_code: &str) -> AppResult<Vec<AttributeOption>> {
        let t = attr_type(&pool.conn, type_code)?;
        Ok(attributes::list_options(&pool.conn, t.id)?)
    }

    pub fn add_option(
        pool: &mut DbPool,
        type_code: &str,
        code: &str,
        name: &str,
        sort_order: i64,
    ) -> AppResult<i64> {
        let t = attr_type(&pool.conn, type_code)?;
        let id = attributes::insert_option(&pool.conn, t.id, code, name, sort_order)
            .map_err(|e| AppError::from_unique(e, &format!("Option '{code}'")))?;
        audit_log_quiet(
            &pool.conn,
            "add",
            &format!("attribute option {type_code}/{code}"),
            name,
        );
        Ok(id)
    }

    pub fn edit_option(
        pool: &mut DbPool,
        type_code: &str,
        code: &str,
        edit: AttributeEdit<'_>,
    ) -> AppResult<AttributeOption> {
        let t = attr_type(&pool.conn, type_code)?;
        let current = attr_option(&pool.conn, &t, code)?;
        let new_code = edit.code.unwrap_or(&current.code).to_string();
        let name = edit.name.unwrap_or(&current.name).to_string();
        let sort_order = edit.sort_order.unwrap_or(current.sort_order);

        attributes::update_option(&pool.conn, current.id, &new_code, &name, sort_order)
            .map_err(|e| AppError::from_unique(e, &format!("Option '{new_code}'")))?;
        audit_log_quiet(
            &pool.conn,
            "edit",
            &format!("attribute option {type_code}/{code}"),
            &name,
        );

        Ok(AttributeOption {
            code: new_code,
            name,
            sort_order,
            ..current
        })
    }

    pub fn delete_option(pool: &mut DbPool, type_code: &str, code: &str) -> AppResult<()> {
        let t = attr_type(&pool.conn, type_code)?;
        let option = attr_option(&pool.conn, &t, code)?;
        if attributes::option_in_use(&pool.conn, option.id)? {
            return Err(AppError::Validation(format!(
                "Option '{type_code}/{code}' is in use by at least one user"
            )));
        }

        attributes::delete_option(&pool.conn, option.id)?;
        audit_log_quiet(
            &pool.conn,
            "del",
            &format!("attribute option {type_code}/{code}"),
            &option.name,
        );
        Ok(())
    }

    /// Give a user an option of a type, or clear the type when `option`
    /// is `None`. Returns the option now held.
    pub fn set_for_user(
        pool: &mut DbPool,
        user_key: &str,
        type_code: &str,
        option: Option<&str>,
    ) -> AppResult<Option<AttributeOption>> {
        let user = lookup::user(&pool.conn, user_key)?;
        let t = attr_type(&pool.conn, type_code)?;
        let target = format!("user {} {}", user.cd, t.code);

        let Some(code) = option else {
            attributes::clear_user_attribute(&pool.conn, user.id, t.id)?;
            audit_log_quiet(&pool.conn, "edit", &target, "cleared");
            return Ok(None);
        };

        let o = attr_option(&pool.conn, &t, code)?;
        attributes::set_user_attribute(&pool.conn, user.id, t.id, o.id)?;
        audit_log_quiet(&pool.conn, "edit", &target, &o.code);
        Ok(Some(o))
    }

    pub fn of_user(pool: &mut DbPool, user_key: &str) -> AppResult<Vec<UserAttribute>> {
        let user = lookup::user(&pool.conn, user_key)?;
        Ok(attributes::list_user_attributes(&pool.conn, user.id)?)
    }
}
