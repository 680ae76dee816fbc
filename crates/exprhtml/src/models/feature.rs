//! GeoJSON 要素

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GeoJSON type 标记
///
/// 只接受字面 "Feature", 其余取值 (含小写 "feature") 反序列化报错.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
enum FeatureKind {
    Feature,
}

/// GeoJSON 要素
///
/// 作为表达式求值的上下文发送给服务;
/// geometry 与 properties 对本库不透明, 原样转发.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: FeatureKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,

    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Feature {
    /// 创建要素
    pub fn new(geometry: Option<Value>, properties: Map<String, Value>) -> Self {
        Self {
            kind: FeatureKind::Feature,
            geometry,
            properties,
        }
    }
}

#[cfg(test)]
fn get_test_feature() -> Feature {
    let properties = match serde_json::json!({"prop0": "value0"}) {
        Value::Object(map) => map,
        _ => unreachable!(),
    };

    Feature::new(
        Some(serde_json::json!({"type": "Point", "coordinates": [102.0, 0.5]})),
        properties,
    )
}

#[test]
fn test_feature_deserialize() {
    let json = r#"{
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [102.0, 0.5]},
        "properties": {"prop0": "value0"}
    }"#;

    let result: Feature = serde_json::from_str(json).unwrap();
    assert_eq!(result, get_test_feature());
}

/// type 必须是字面 "Feature"
#[test]
fn test_feature_kind_case() {
    let json = r#"{"type": "feature", "properties": {}}"#;
    assert!(serde_json::from_str::<Feature>(json).is_err());

    let json = r#"{"type": "Point", "properties": {}}"#;
    assert!(serde_json::from_str::<Feature>(json).is_err());
}

/// 未闭合的 JSON 报错
#[test]
fn test_feature_truncated() {
    let json = r#"{"type": "Feature", "properties": {"prop0": "value0"}"#;
    assert!(serde_json::from_str::<Feature>(json).is_err());

    let json = r#"[{"type": "Feature", "properties": {}}, {"type": "Feature", "properties": {}}"#;
    assert!(serde_json::from_str::<Vec<Feature>>(json).is_err());
}
