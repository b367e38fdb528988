use crate::{
    errors::AppError,
    state::AppState,
    structs::settings::{DashboardSettings, SettingsUpdate},
};

pub async fn get_settings(state: &AppState) -> DashboardSettings {
    state.settings.read().await.clone()
}

pub fn validate_multiplier(multiplier: f64) -> Result<f64, AppError> {
    if multiplier.is_finite() && multiplier >= 0.0 {
        Ok(multiplier)
    } else {
        Err(AppError::InvalidInput(format!(
            "footfall multiplier must be a non-negative number, got {}",
            multiplier
        )))
    }
}

pub async fn update_settings(
    state: &AppState,
    update: SettingsUpdate,
) -> Result<DashboardSettings, AppError> {
    let multiplier = update.footfall_multiplier.map(validate_multiplier).transpose()?;

    let mut settings = state.settings.write().await;

    if let Some(location) = update.location {
        settings.location = location.trim().to_string();
    }
    if let Some(target_date) = update.target_date {
        settings.target_date = target_date.trim().to_string();
    }
    if let Some(multiplier) = multiplier {
        settings.footfall_multiplier = multiplier;
    }

    Ok(settings.clone())
}

/// 預測完回寫當日總來客，給 advisor 當 bookings 用
pub async fn set_total_daily_covers(state: &AppState, covers: u32) {
    state.settings.write().await.total_daily_covers = covers;
}

pub async fn set_footfall_multiplier(state: &AppState, multiplier: f64) {
    state.settings.write().await.footfall_multiplier = multiplier;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let state = AppState::with_records(AppConfig::default(), Vec::new());
        let updated = update_settings(
            &state,
            SettingsUpdate {
                location: Some("  Taipei Xinyi ".to_string()),
                ..SettingsUpdate::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.location, "Taipei Xinyi");
        assert_eq!(updated.target_date, "2025-02-14");
        assert_eq!(updated.total_daily_covers, 118);
    }

    #[tokio::test]
    async fn invalid_multiplier_is_rejected() {
        let state = AppState::with_records(AppConfig::default(), Vec::new());
        let result = update_settings(
            &state,
            SettingsUpdate {
                location: Some("Soho".to_string()),
                footfall_multiplier: Some(-0.5),
                ..SettingsUpdate::default()
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        // 驗證失敗時不能部分寫入
        assert_eq!(get_settings(&state).await.location, "London Brixton");
    }

    #[test]
    fn nan_multiplier_is_invalid() {
        assert!(validate_multiplier(f64::NAN).is_err());
        assert_eq!(validate_multiplier(0.0).unwrap(), 0.0);
    }
}
