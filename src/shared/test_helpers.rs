//! In-memory store fakes and auth shortcuts for tests.

#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use axum::{extract::Request, middleware::Next, Router};
#[cfg(test)]
use chrono::Utc;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::core::error::Result;
#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;
#[cfg(test)]
use crate::features::reports::models::{DailyReport, NewDailyReport, ReportWithCreator};
#[cfg(test)]
use crate::features::reports::repository::ReportStore;
#[cfg(test)]
use crate::features::users::models::{NewUser, User};
#[cfg(test)]
use crate::features::users::repository::UserStore;
#[cfg(test)]
use crate::shared::constants::ROLE_ADMIN;

/// Layer a router with a fixed identity, skipping token verification.
#[cfg(test)]
pub fn with_auth(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}

#[cfg(test)]
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[cfg(test)]
impl InMemoryUserStore {
    /// Insert directly, bypassing the service layer.
    pub fn seed(&self, new_user: NewUser) -> User {
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            pin_hash: new_user.pin_hash,
            role: new_user.role,
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.name == name)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        Ok(self.seed(new_user))
    }

    async fn list(&self) -> Result<Vec<User>> {
        let mut users = self.all();
        users.reverse();
        Ok(users)
    }

    async fn admin_exists(&self) -> Result<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.role == ROLE_ADMIN))
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct InMemoryReportStore {
    reports: Mutex<Vec<DailyReport>>,
}

#[cfg(test)]
impl InMemoryReportStore {
    pub fn all(&self) -> Vec<DailyReport> {
        self.reports.lock().unwrap().clone()
    }
}

#[cfg(test)]
fn materialize(created_by: Uuid, r: NewDailyReport) -> DailyReport {
    DailyReport {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        created_by: Some(created_by),
        report_date: r.report_date,
        work_start: r.work_start,
        work_end: r.work_end,
        break_hours: r.break_hours,
        net_hours: r.net_hours,
        weather: r.weather,
        site: r.site,
        team: r.team,
        foreman_name: r.foreman_name,
        foreman_hours: r.foreman_hours,
        lead_worker_name: r.lead_worker_name,
        lead_worker_hours: r.lead_worker_hours,
        skilled_worker_name: r.skilled_worker_name,
        skilled_worker_hours: r.skilled_worker_hours,
        electrician_name: r.electrician_name,
        electrician_hours: r.electrician_hours,
        helper_name: r.helper_name,
        helper_hours: r.helper_hours,
        truck_driver_name: r.truck_driver_name,
        truck_driver_hours: r.truck_driver_hours,
        work_description: r.work_description,
        materials: r.materials,
        remarks: r.remarks,
    }
}

#[cfg(test)]
#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn insert(&self, created_by: Uuid, report: NewDailyReport) -> Result<DailyReport> {
        let row = materialize(created_by, report);
        self.reports.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ReportWithCreator>> {
        let reports = self.reports.lock().unwrap();
        Ok(reports
            .iter()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|r| ReportWithCreator {
                report: r.clone(),
                created_by_name: None,
            })
            .collect())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.reports.lock().unwrap().len() as i64)
    }

    async fn find(&self, id: Uuid) -> Result<Option<ReportWithCreator>> {
        Ok(self
            .reports
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .map(|r| ReportWithCreator {
                report: r.clone(),
                created_by_name: None,
            }))
    }

    async fn update(&self, id: Uuid, report: NewDailyReport) -> Result<Option<DailyReport>> {
        let mut reports = self.reports.lock().unwrap();
        let Some(existing) = reports.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        let mut updated = materialize(existing.created_by.unwrap_or(Uuid::nil()), report);
        updated.id = existing.id;
        updated.created_at = existing.created_at;
        updated.created_by = existing.created_by;
        *existing = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut reports = self.reports.lock().unwrap();
        let before = reports.len();
        reports.retain(|r| r.id != id);
        Ok(reports.len() < before)
    }
}
