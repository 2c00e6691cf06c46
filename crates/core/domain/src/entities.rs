//! 实体枚举与值对象。
//!
//! 所有枚举的字符串形式即为对外 JSON 中使用的小写名称，
//! 通过 `as_str` 输出、`FromStr` 解析。

use std::fmt;
use std::str::FromStr;

/// 枚举解析失败。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// 全部取值（声明顺序）。
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// 用户角色。
    #[derive(Default)]
    UserRole, "role" {
        #[default]
        User => "user",
        Researcher => "researcher",
        Admin => "admin",
    }
}

wire_enum! {
    /// 项目类型。
    ProjectType, "project type" {
        Forest => "forest",
        Marine => "marine",
        Climate => "climate",
        Wildlife => "wildlife",
        Research => "research",
        Education => "education",
    }
}

wire_enum! {
    /// 项目状态。
    #[derive(Default)]
    ProjectStatus, "project status" {
        #[default]
        Active => "active",
        Paused => "paused",
        Completed => "completed",
    }
}

wire_enum! {
    /// 告警类型。
    AlertType, "alert type" {
        Climate => "climate",
        Forest => "forest",
        Wildlife => "wildlife",
        Marine => "marine",
    }
}

wire_enum! {
    /// 告警级别。
    AlertSeverity, "severity" {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

wire_enum! {
    /// 传感器读数类型。
    SensorType, "sensor type" {
        Temperature => "temperature",
        Humidity => "humidity",
        Co2 => "co2",
        WildlifeCount => "wildlife_count",
        ForestCoverage => "forest_coverage",
        OceanPh => "ocean_ph",
    }
}

/// 地理坐标（纬度、经度）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
