use crate::core::lookup;
use crate::db::log::audit_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::users;
use crate::errors::{AppError, AppResult};
use crate::models::user::User;

pub struct UserLogic;

impl UserLogic {
    pub fn add(pool: &mut DbPool, cd: &str, name: &str, email: &str) -> AppResult<i64> {
        let id = users::insert_user(&pool.conn, cd, name, email)
            .map_err(|e| AppError::from_unique(e, &format!("User '{cd}'")))?;
        audit_log_quiet(&pool.conn, "add", &format!("user {cd}"), name);
        Ok(id)
    }

    pub fn list(pool: &mut DbPool, active_only: bool) -> AppResult<Vec<User>> {
        Ok(users::list_users(&pool.conn, active_only)?)
    }

    pub fn edit(
        pool: &mut DbPool,
        key: &str,
        name: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<User> {
        let current = lookup::user(&pool.conn, key)?;
        let name = name.unwrap_or(&current.name).to_string();
        let email = email.unwrap_or(&current.email).to_string();

        users::update_user(&pool.conn, current.id, &name, &email)?;
        audit_log_quiet(&pool.conn, "edit", &format!("user {}", current.cd), &name);

        Ok(User {
            name,
            email,
            ..current
        })
    }

    pub fn set_active(pool: &mut DbPool, key: &str, active: bool) -> AppResult<User> {
        let user = lookup::user(&pool.conn, key)?;
        users::set_active(&pool.conn, user.id, active)?;

        let op = if active { "activate" } else { "deactivate" };
        audit_log_quiet(&pool.conn, "edit", &format!("user {}", user.cd), op);

        Ok(User {
            is_active: active,
            ..user
        })
    }

    pub fn delete(pool: &mut DbPool, key: &str) -> AppResult<User> {
        let user = lookup::user(&pool.conn, key)?;
        users::delete_user(&pool.conn, user.id)?;
        audit_log_quiet(&pool.conn, "del", &format!("user {}", user.cd), &user.name);
        Ok(user)
    }
}
