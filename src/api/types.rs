// API 类型定义模块
// 四个模拟接口的响应结构，字段顺序即 JSON 输出顺序

use serde::Serialize;

// ============== /api/status ==============

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub timestamp: String,
    pub system: SystemStatus,
    pub server: ServerStatus,
    pub modules: ModuleStatus,
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub status: &'static str,
    /// 运行时长（秒）
    pub uptime: u64,
    pub version: &'static str,
    /// 内存占用百分比
    pub memory_usage: u32,
    pub cpu_usage: f64,
}

#[derive(Debug, Serialize)]
pub struct ServerStatus {
    /// 实际绑定的端口
    pub port: u16,
    pub active_connections: u32,
    pub total_requests: u64,
    pub error_count: u64,
}

#[derive(Debug, Serialize)]
pub struct ModuleStatus {
    pub satellite: &'static str,
    pub aircraft: &'static str,
    pub obstruction: &'static str,
    pub websocket: &'static str,
}

// ============== /api/satellite ==============

#[derive(Debug, Serialize)]
pub struct SatelliteResponse {
    pub timestamp: String,
    pub satellites: Vec<Satellite>,
}

#[derive(Debug, Serialize)]
pub struct Satellite {
    pub prn: u32,
    /// 方位角（度）
    pub azimuth: f64,
    /// 仰角（度）
    pub elevation: f64,
    pub signal_strength: f64,
    pub visible: bool,
    pub obstruction: &'static str,
}

// ============== /api/trajectory ==============

#[derive(Debug, Serialize)]
pub struct TrajectoryResponse {
    pub timestamp: String,
    pub trajectory: Trajectory,
}

#[derive(Debug, Serialize)]
pub struct Trajectory {
    pub flight_id: &'static str,
    pub aircraft_type: &'static str,
    pub current_phase: &'static str,
    pub position: Position,
    pub attitude: Attitude,
    pub velocity: Velocity,
}

#[derive(Debug, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    /// 高度（米）
    pub altitude: f64,
}

#[derive(Debug, Serialize)]
pub struct Attitude {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

#[derive(Debug, Serialize)]
pub struct Velocity {
    pub speed: f64,
    pub vertical_speed: f64,
}

// ============== /api/analysis ==============

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub timestamp: String,
    pub analysis: Analysis,
}

#[derive(Debug, Serialize)]
pub struct Analysis {
    pub total_satellites: u32,
    pub visible_satellites: u32,
    pub obstructed_satellites: u32,
    pub avg_signal_strength: f64,
    pub visibility_stats: VisibilityStats,
    pub obstruction_stats: ObstructionStats,
    /// 覆盖质量，如 "83.3%"
    pub coverage_quality: String,
}

#[derive(Debug, Serialize)]
pub struct VisibilityStats {
    pub excellent: u32,
    pub good: u32,
    pub poor: u32,
    pub none: u32,
}

#[derive(Debug, Serialize)]
pub struct ObstructionStats {
    pub no_obstruction: u32,
    pub partial_obstruction: u32,
    pub full_obstruction: u32,
}

// ============== 错误响应 ==============

#[derive(Debug, Serialize)]
pub struct ApiError<'a> {
    pub error: &'static str,
    pub path: &'a str,
}

/// 任一模拟接口的响应体
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MockPayload {
    Status(StatusResponse),
    Satellite(SatelliteResponse),
    Trajectory(TrajectoryResponse),
    Analysis(AnalysisResponse),
}
