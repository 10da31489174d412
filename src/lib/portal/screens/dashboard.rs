use log::{error, info};

use super::{require_login, ScreenError};
use crate::portal::{
    models::stats_model::UserTotals, notifier::Notifier, portal_api::PortalApi, session::Session,
};

pub const USER_CHART_LABELS: [&str; 3] = ["Administrators", "Teachers", "Students"];

/// Data behind the users-per-role pie and doughnut charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChart {
    pub labels: [&'static str; 3],
    pub data: [u64; 3],
}

impl UserChart {
    pub fn from_totals(totals: UserTotals) -> Self {
        UserChart {
            labels: USER_CHART_LABELS,
            data: [totals.admins, totals.teachers, totals.students],
        }
    }

    pub fn render(&self) -> String {
        let total: u64 = self.data.iter().sum();
        self.labels
            .iter()
            .zip(self.data)
            .map(|(label, count)| {
                let share = if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                };
                format!("{:<15}{:>6} ({:.1}%)", label, count, share)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub async fn load_user_chart<A: PortalApi, N: Notifier>(
    api: &A,
    notifier: &N,
    session: &Session,
) -> Result<UserChart, ScreenError> {
    require_login(session)?;
    match api.total_users().await {
        Ok(totals) => {
            info!("Users per role: {:?}", totals);
            Ok(UserChart::from_totals(totals))
        }
        Err(err) => {
            error!("Could not count users: {}", err);
            let code = err
                .status()
                .map(|status| status.as_u16().to_string())
                .unwrap_or_else(|| "none".to_owned());
            notifier.alert(&format!(
                "Could not get the number of users per role. Code: {}",
                code
            ));
            Err(err.into())
        }
    }
}
