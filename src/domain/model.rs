use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Akashi 打刻時使用的時區，固定為 JST
pub const STAMP_TIMEZONE: &str = "+09:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickType {
    Single,
    Double,
    Long,
}

impl ClickType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClickType::Single => "SINGLE",
            ClickType::Double => "DOUBLE",
            ClickType::Long => "LONG",
        }
    }
}

impl fmt::Display for ClickType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PunchDirection {
    In,
    Out,
}

impl PunchDirection {
    /// Akashi API 的打刻種別: 11 = 出勤, 12 = 退勤
    pub(crate) fn code(&self) -> u8 {
        match self {
            PunchDirection::In => 11,
            PunchDirection::Out => 12,
        }
    }
}

impl From<ClickType> for PunchDirection {
    fn from(click_type: ClickType) -> Self {
        match click_type {
            ClickType::Single | ClickType::Long => PunchDirection::In,
            ClickType::Double => PunchDirection::Out,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StampRequest<'a> {
    pub token: &'a str,
    #[serde(rename = "type")]
    pub stamp_type: u8,
    pub timezone: &'static str,
}

impl<'a> StampRequest<'a> {
    pub fn new(token: &'a str, click_type: ClickType) -> Self {
        Self {
            token,
            stamp_type: PunchDirection::from(click_type).code(),
            timezone: STAMP_TIMEZONE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StampResponse {
    pub success: bool,
}

/// AWS IoT 1-Click 事件，只保留需要的欄位
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IoTClickEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub device_event: DeviceEvent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub button_clicked: ButtonClicked,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonClicked {
    #[serde(default, deserialize_with = "null_as_default")]
    pub click_type: String,
}

// 明確的 null 與缺少欄位同樣處理，交給 resolver 報錯
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl IoTClickEvent {
    pub fn with_click_type(click_type: impl Into<String>) -> Self {
        Self {
            device_event: DeviceEvent {
                button_clicked: ButtonClicked {
                    click_type: click_type.into(),
                },
            },
        }
    }

    pub fn raw_click_type(&self) -> &str {
        &self.device_event.button_clicked.click_type
    }
}
