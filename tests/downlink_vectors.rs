//! Downlink vectors for the WT101 encoder.
//!
//! Expected bytes are written as hex strings, the way device documentation
//! and network server consoles show downlinks.

use proptest::prelude::*;

use wt101_codec::settings::{
    ControlMode, FreezeProtection, OpenWindowDetection, TemperatureCalibration,
    ValveControlAlgorithm,
};
use wt101_codec::{encode, ConfigurationRequest, Opcode};

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

fn encode_hex(request: &ConfigurationRequest) -> String {
    hex(&encode(request).expect("request should encode"))
}

#[test]
fn test_trigger_settings() {
    let cases: [(fn(ConfigurationRequest, bool) -> ConfigurationRequest, &str); 5] = [
        (ConfigurationRequest::with_reboot, "FF10FF"),
        (ConfigurationRequest::with_report_status, "FF28FF"),
        (ConfigurationRequest::with_sync_time, "FF3B02"),
        (ConfigurationRequest::with_restore_open_window_detection_status, "FF57FF"),
        (ConfigurationRequest::with_valve_calibration, "FFADFF"),
    ];

    for (set, expected) in cases {
        assert_eq!(encode_hex(&set(ConfigurationRequest::new(), true)), expected);
        assert_eq!(encode_hex(&set(ConfigurationRequest::new(), false)), "");
    }
}

#[test]
fn test_timezone() {
    assert_eq!(encode_hex(&ConfigurationRequest::new().with_timezone(-4.0)), "FF17D8FF");
    assert_eq!(encode_hex(&ConfigurationRequest::new().with_timezone(8.0)), "FF175000");
}

#[test]
fn test_report_interval() {
    assert_eq!(
        encode_hex(&ConfigurationRequest::new().with_report_interval(10.0)),
        "FF8E000A00"
    );
}

#[test]
fn test_temperature_calibration() {
    let request = |c| ConfigurationRequest::new().with_temperature_calibration(c);
    assert_eq!(encode_hex(&request(TemperatureCalibration::enabled(5.0))), "FFAB013200");
    assert_eq!(encode_hex(&request(TemperatureCalibration::enabled(-5.0))), "FFAB01CEFF");
    assert_eq!(encode_hex(&request(TemperatureCalibration::disabled())), "FFAB00");
}

#[test]
fn test_temperature_control() {
    let request = ConfigurationRequest::new().with_temperature_control_enable(true);
    assert_eq!(encode_hex(&request), "FFB301");

    let request = ConfigurationRequest::new().with_temperature_control_mode(ControlMode::from_name("auto"));
    assert_eq!(encode_hex(&request), "FFAE00");

    let request = ConfigurationRequest::new().with_temperature_control_mode(ControlMode::from_name("manual"));
    assert_eq!(encode_hex(&request), "FFAE01");
}

#[test]
fn test_temperature_target() {
    let request = ConfigurationRequest::new().with_temperature_target(10.0, 0.1);
    assert_eq!(encode_hex(&request), "FFB10A0100");

    let request = ConfigurationRequest::new().with_temperature_target(28.0, 5.0);
    assert_eq!(encode_hex(&request), "FFB11C3200");
}

#[test]
fn test_open_window_detection() {
    let request = |d| ConfigurationRequest::new().with_open_window_detection(d);
    assert_eq!(encode_hex(&request(OpenWindowDetection::enabled(2.0, 1.0))), "FFAF01140100");
    assert_eq!(encode_hex(&request(OpenWindowDetection::enabled(10.0, 1440.0))), "FFAF0164A005");
    assert_eq!(encode_hex(&request(OpenWindowDetection::disabled())), "FFAF00000000");
}

#[test]
fn test_valve_settings() {
    assert_eq!(encode_hex(&ConfigurationRequest::new().with_valve_opening(50.0)), "FFB432");

    let request = ConfigurationRequest::new().with_valve_control_algorithm(ValveControlAlgorithm::Rate);
    assert_eq!(encode_hex(&request), "FFAC00");

    let algorithm = ValveControlAlgorithm::from_name("pid").unwrap();
    let request = ConfigurationRequest::new().with_valve_control_algorithm(algorithm);
    assert_eq!(encode_hex(&request), "FFAC01");

    assert!(ValveControlAlgorithm::from_name("bang-bang").unwrap_err().is_range_error());
}

#[test]
fn test_freeze_protection_and_child_lock() {
    let request = ConfigurationRequest::new().with_freeze_protection(FreezeProtection::enabled(5.0));
    assert_eq!(encode_hex(&request), "FFB0013200");

    let request = ConfigurationRequest::new().with_freeze_protection(FreezeProtection::disabled());
    assert_eq!(encode_hex(&request), "FFB0000000");

    assert_eq!(encode_hex(&ConfigurationRequest::new().with_child_lock(true)), "FF2501");
}

#[test]
fn test_multi_key_order_is_fixed() {
    let a = ConfigurationRequest::new().with_reboot(true).with_child_lock(true);
    let b = ConfigurationRequest::new().with_child_lock(true).with_reboot(true);
    assert_eq!(encode_hex(&a), "FF10FFFF2501");
    assert_eq!(encode_hex(&b), "FF10FFFF2501");
}

#[test]
fn test_frames_split_like_a_decoder() {
    let request = ConfigurationRequest::new()
        .with_valve_opening(20.0)
        .with_timezone(1.0)
        .with_sync_time(true);
    let downlink = encode(&request).unwrap();

    // Walk the downlink using fixed per-opcode lengths only
    let mut offset = 0;
    let mut seen = Vec::new();
    while offset < downlink.len() {
        assert_eq!(downlink[offset], 0xFF);
        let opcode = Opcode::from_u8(downlink[offset + 1]).expect("known opcode");
        seen.push(opcode);
        offset += opcode.frame_len();
    }
    assert_eq!(offset, downlink.len());
    assert_eq!(seen, [Opcode::SyncTime, Opcode::Timezone, Opcode::ValveOpening]);
}

#[cfg(feature = "json")]
mod json {
    use super::hex;
    use serde_json::json;
    use wt101_codec::encode_json;

    fn encode_json_hex(value: serde_json::Value) -> String {
        hex(&encode_json(&value).expect("request should encode"))
    }

    #[test]
    fn test_json_vectors() {
        assert_eq!(encode_json_hex(json!({ "reboot": true })), "FF10FF");
        assert_eq!(encode_json_hex(json!({ "timezone": -4 })), "FF17D8FF");
        assert_eq!(encode_json_hex(json!({ "report_interval": 10 })), "FF8E000A00");
        assert_eq!(
            encode_json_hex(json!({ "temperature_calibration": { "enable": true, "temperature": -5 } })),
            "FFAB01CEFF"
        );
        assert_eq!(
            encode_json_hex(json!({ "temperature_calibration": { "enable": false } })),
            "FFAB00"
        );
        assert_eq!(
            encode_json_hex(json!({ "temperature_target": 10, "temperature_error": 0.1 })),
            "FFB10A0100"
        );
        assert_eq!(
            encode_json_hex(json!({ "open_window_detection": { "enable": true, "rate": 2, "time": 1 } })),
            "FFAF01140100"
        );
        assert_eq!(encode_json_hex(json!({ "valve_control_algorithm": "pid" })), "FFAC01");
    }

    #[test]
    fn test_json_disabled_settings_ignore_values() {
        assert_eq!(
            encode_json_hex(json!({ "temperature_calibration": { "enable": false, "temperature": null } })),
            "FFAB00"
        );
        assert_eq!(
            encode_json_hex(json!({ "open_window_detection": { "enable": false, "rate": "fast" } })),
            "FFAF00000000"
        );
        assert_eq!(
            encode_json_hex(json!({ "freeze_protection": { "enable": false, "temperature": "5" } })),
            "FFB0000000"
        );
    }

    #[test]
    fn test_json_temperature_control_sub_keys() {
        assert_eq!(
            encode_json_hex(json!({ "temperature_control": { "enable": true, "mode": "auto" } })),
            "FFB301FFAE00"
        );
        assert_eq!(
            encode_json_hex(json!({ "temperature_control": { "mode": "heat" } })),
            "FFAE01"
        );
        assert_eq!(encode_json_hex(json!({ "temperature_control": {} })), "");
    }

    #[test]
    fn test_json_key_order_is_irrelevant() {
        assert_eq!(
            encode_json_hex(json!({ "child_lock": true, "reboot": true })),
            "FF10FFFF2501"
        );
    }

    #[test]
    fn test_json_errors() {
        let err = encode_json(&json!({ "timezone": 13 })).unwrap_err();
        assert_eq!(err.to_string(), "timezone must be between -12 and 12");

        let err = encode_json(&json!({ "reboot": 1 })).unwrap_err();
        assert_eq!(err.to_string(), "reboot must be a boolean");

        let err = encode_json(&json!({ "valve_control_algorithm": "bang-bang" })).unwrap_err();
        assert_eq!(err.to_string(), "valve_control_algorithm must be one of rate, pid");

        let err = encode_json(&json!({ "temperature_calibration": { "enable": true } })).unwrap_err();
        assert_eq!(err.field(), Some("temperature_calibration.temperature"));

        let err = encode_json(&json!({ "temperature_target": 21 })).unwrap_err();
        assert_eq!(err.field(), Some("temperature_error"));
    }

    #[test]
    fn test_json_does_not_mutate_input() {
        let value = json!({ "timezone": 8, "child_lock": false });
        let before = value.clone();
        let first = encode_json(&value).unwrap();
        let second = encode_json(&value).unwrap();
        assert_eq!(first, second);
        assert_eq!(value, before);
    }
}

// ── Property tests ──────────────────────────────────────────

fn decode_i16_le(bytes: &[u8]) -> i16 {
    i16::from_le_bytes([bytes[0], bytes[1]])
}

proptest! {
    #[test]
    fn timezone_round_trips(hours in -12i32..=12) {
        let request = ConfigurationRequest::new().with_timezone(f64::from(hours));
        let downlink = encode(&request).unwrap();
        prop_assert_eq!(i32::from(decode_i16_le(&downlink[2..4])) / 10, hours);
        prop_assert_eq!(i32::from(decode_i16_le(&downlink[2..4])) % 10, 0);
    }

    #[test]
    fn calibration_round_trips(celsius in -3276i32..=3276) {
        let request = ConfigurationRequest::new()
            .with_temperature_calibration(TemperatureCalibration::enabled(f64::from(celsius)));
        let downlink = encode(&request).unwrap();
        prop_assert_eq!(f64::from(decode_i16_le(&downlink[3..5])) / 10.0, f64::from(celsius));
    }

    #[test]
    fn freeze_protection_round_trips(celsius in -3276i32..=3276) {
        let request = ConfigurationRequest::new()
            .with_freeze_protection(FreezeProtection::enabled(f64::from(celsius)));
        let downlink = encode(&request).unwrap();
        prop_assert_eq!(f64::from(decode_i16_le(&downlink[3..5])) / 10.0, f64::from(celsius));
    }

    #[test]
    fn encoding_is_pure(
        hours in -12i32..=12,
        minutes in 1i32..=1440,
        percent in 0i32..=100,
        reboot in any::<bool>(),
        lock in any::<bool>(),
    ) {
        let request = ConfigurationRequest::new()
            .with_timezone(f64::from(hours))
            .with_report_interval(f64::from(minutes))
            .with_valve_opening(f64::from(percent))
            .with_reboot(reboot)
            .with_child_lock(lock);
        let snapshot = request.clone();

        let first = encode(&request).unwrap();
        let second = encode(&request).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&request, &snapshot);
    }

    #[test]
    fn downlink_is_concatenation_of_single_settings(
        hours in -12i32..=12,
        percent in 0i32..=100,
        lock in any::<bool>(),
    ) {
        let tz = ConfigurationRequest::new().with_timezone(f64::from(hours));
        let valve = ConfigurationRequest::new().with_valve_opening(f64::from(percent));
        let child = ConfigurationRequest::new().with_child_lock(lock);
        let combined = ConfigurationRequest::new()
            .with_child_lock(lock)
            .with_valve_opening(f64::from(percent))
            .with_timezone(f64::from(hours));

        let expected = [encode_hex(&tz), encode_hex(&valve), encode_hex(&child)].concat();
        prop_assert_eq!(encode_hex(&combined), expected);
    }

    #[test]
    fn out_of_range_timezone_fails(hours in prop_oneof![-1000.0f64..-12.01, 12.01f64..1000.0]) {
        let request = ConfigurationRequest::new().with_timezone(hours);
        prop_assert!(encode(&request).unwrap_err().is_range_error());
    }
}
