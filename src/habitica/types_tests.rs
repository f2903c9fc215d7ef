#[cfg(test)]
mod tests {
    use crate::{
        core::RemticaError,
        habitica::types::{
            ApiResponse,
            UserData,
            UserStats,
        },
    };

    #[test]
    fn parses_user_payload_with_camel_case_stat_names() {
        let json = r#"{
            "success": true,
            "data": {
                "profile": { "name": "Scholar" },
                "stats": {
                    "hp": 48.0,
                    "exp": 123.5,
                    "lvl": 12,
                    "maxHealth": 50,
                    "toNextLevel": 280,
                    "gp": 17.25
                }
            }
        }"#;

        let response: ApiResponse<UserData> = serde_json::from_str(json).expect("valid payload");
        let user = response.into_result().expect("successful response");

        assert_eq!(user.profile.name, "Scholar");
        assert_eq!(user.stats.lvl, 12);
        assert!((user.stats.max_health - 50.0).abs() < f64::EPSILON);
        assert!((user.stats.to_next_level - 280.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_gold_defaults_to_zero() {
        let json = r#"{
            "hp": 10.0,
            "exp": 0.0,
            "lvl": 1,
            "maxHealth": 50,
            "toNextLevel": 150
        }"#;

        let stats: UserStats = serde_json::from_str(json).expect("valid stats");
        assert!((stats.gp - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejected_response_carries_the_remote_message() {
        let json = r#"{
            "success": false,
            "message": "There is no account that uses those credentials."
        }"#;

        let response: ApiResponse<UserStats> = serde_json::from_str(json).expect("valid envelope");
        match response.into_result() {
            Err(RemticaError::RemoteRejected(message)) => {
                assert!(message.contains("credentials"));
            }
            other => panic!("expected RemoteRejected, got {:?}", other),
        }
    }

    #[test]
    fn success_without_data_is_still_a_failure_for_reads() {
        let json = r#"{ "success": true }"#;

        let response: ApiResponse<UserStats> = serde_json::from_str(json).expect("valid envelope");
        assert!(matches!(response.into_result(), Err(RemticaError::RemoteRejected(_))));
    }

    #[test]
    fn writes_only_need_the_success_flag() {
        let json = r#"{ "success": true }"#;

        let response: ApiResponse<serde_json::Value> =
            serde_json::from_str(json).expect("valid envelope");
        assert!(response.ensure_success().is_ok());
    }
}
