// Mock payload generators
// Placeholder telemetry, jittered per request from the caller's random source

use rand::{Rng, RngCore};

use super::types::{
    Analysis, AnalysisResponse, Attitude, ModuleStatus, MockPayload, ObstructionStats, Position,
    Satellite, SatelliteResponse, ServerStatus, StatusResponse, SystemStatus, Trajectory,
    TrajectoryResponse, Velocity, VisibilityStats,
};

pub const TOTAL_SATELLITES: u32 = 12;

/// Minimum elevation (degrees) for a satellite to count as visible
pub const VISIBLE_MIN_ELEVATION: f64 = 10.0;
/// Minimum signal strength for a satellite to count as visible
pub const VISIBLE_MIN_SIGNAL: f64 = 30.0;

pub const NO_OBSTRUCTION: &str = "无";
pub const FUSELAGE_OBSTRUCTION: &str = "机身遮挡";

const BASE_LATITUDE: f64 = 39.9042;
const BASE_LONGITUDE: f64 = 116.4074;
const BASE_ALTITUDE: f64 = 10_000.0;
const BASE_SPEED: f64 = 250.0;

/// Per-request inputs shared by every generator
#[derive(Debug, Clone)]
pub struct MockContext {
    /// Local time, `%Y-%m-%dT%H:%M:%S`
    pub timestamp: String,
    pub port: u16,
}

impl MockContext {
    pub fn now(port: u16) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            port,
        }
    }
}

pub fn status(ctx: &MockContext, _rng: &mut dyn RngCore) -> MockPayload {
    MockPayload::Status(StatusResponse {
        timestamp: ctx.timestamp.clone(),
        system: SystemStatus {
            status: "运行中",
            uptime: 3600,
            version: "1.0.0",
            memory_usage: 45,
            cpu_usage: 12.5,
        },
        server: ServerStatus {
            port: ctx.port,
            active_connections: 1,
            total_requests: 42,
            error_count: 0,
        },
        modules: ModuleStatus {
            satellite: "已加载",
            aircraft: "已加载",
            obstruction: "已加载",
            websocket: "已启用",
        },
    })
}

pub fn satellite(ctx: &MockContext, rng: &mut dyn RngCore) -> MockPayload {
    let satellites = (1..=TOTAL_SATELLITES)
        .map(|prn| {
            let slot = f64::from(prn - 1) * 30.0;
            let azimuth = normalize_azimuth(round1(slot + rng.gen_range(-5.0..5.0)));
            let elevation = round1(rng.gen_range(0.0..75.0));
            let signal_strength = round1(rng.gen_range(25.0..55.0));
            let visible = is_visible(elevation, signal_strength);

            Satellite {
                prn,
                azimuth,
                elevation,
                signal_strength,
                visible,
                obstruction: if visible {
                    NO_OBSTRUCTION
                } else {
                    FUSELAGE_OBSTRUCTION
                },
            }
        })
        .collect();

    MockPayload::Satellite(SatelliteResponse {
        timestamp: ctx.timestamp.clone(),
        satellites,
    })
}

pub fn trajectory(ctx: &MockContext, rng: &mut dyn RngCore) -> MockPayload {
    MockPayload::Trajectory(TrajectoryResponse {
        timestamp: ctx.timestamp.clone(),
        trajectory: Trajectory {
            flight_id: "TEST001",
            aircraft_type: "B737-800",
            current_phase: "巡航",
            position: Position {
                latitude: round6(BASE_LATITUDE + rng.gen_range(-0.01..=0.01)),
                longitude: round6(BASE_LONGITUDE + rng.gen_range(-0.01..=0.01)),
                altitude: round1(BASE_ALTITUDE + rng.gen_range(-1000.0..=1000.0)),
            },
            attitude: Attitude {
                roll: round1(rng.gen_range(-5.0..=5.0)),
                pitch: round1(rng.gen_range(-3.0..=3.0)),
                yaw: round1(rng.gen_range(0.0..360.0)),
            },
            velocity: Velocity {
                speed: round1(BASE_SPEED + rng.gen_range(-50.0..=50.0)),
                vertical_speed: round1(rng.gen_range(-10.0..=10.0)),
            },
        },
    })
}

pub fn analysis(ctx: &MockContext, rng: &mut dyn RngCore) -> MockPayload {
    let visible = 8 + rng.gen_range(0..=4);
    let obstructed = TOTAL_SATELLITES - visible;

    MockPayload::Analysis(AnalysisResponse {
        timestamp: ctx.timestamp.clone(),
        analysis: Analysis {
            total_satellites: TOTAL_SATELLITES,
            visible_satellites: visible,
            obstructed_satellites: obstructed,
            avg_signal_strength: round1(40.0 + rng.gen_range(0.0..15.0)),
            visibility_stats: VisibilityStats {
                excellent: visible.saturating_sub(2),
                good: 2,
                poor: 1,
                none: obstructed,
            },
            obstruction_stats: ObstructionStats {
                no_obstruction: visible.saturating_sub(1),
                partial_obstruction: 1,
                full_obstruction: obstructed,
            },
            coverage_quality: coverage_quality(visible),
        },
    })
}

pub fn is_visible(elevation: f64, signal_strength: f64) -> bool {
    elevation > VISIBLE_MIN_ELEVATION && signal_strength > VISIBLE_MIN_SIGNAL
}

/// Visible share of the constellation as a percentage string, e.g. `"83.3%"`
pub fn coverage_quality(visible: u32) -> String {
    let percent = f64::from(visible) / f64::from(TOTAL_SATELLITES) * 100.0;
    format!("{percent:.1}%")
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

fn normalize_azimuth(degrees: f64) -> f64 {
    let wrapped = round1(degrees.rem_euclid(360.0));
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ctx() -> MockContext {
        MockContext {
            timestamp: "2024-01-01T12:00:00".to_string(),
            port: 8080,
        }
    }

    fn has_one_decimal(value: f64) -> bool {
        ((value * 10.0).round() - value * 10.0).abs() < 1e-6
    }

    #[test]
    fn test_satellite_shape_and_visibility() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let MockPayload::Satellite(resp) = satellite(&ctx(), &mut rng) else {
                panic!("expected satellite payload");
            };
            assert_eq!(resp.satellites.len(), 12);
            for (i, sat) in resp.satellites.iter().enumerate() {
                assert_eq!(sat.prn as usize, i + 1);
                assert!((0.0..360.0).contains(&sat.azimuth));
                assert!(has_one_decimal(sat.azimuth));
                assert!(has_one_decimal(sat.elevation));
                assert!(has_one_decimal(sat.signal_strength));
                assert_eq!(
                    sat.visible,
                    sat.elevation > 10.0 && sat.signal_strength > 30.0
                );
                assert_eq!(sat.obstruction == NO_OBSTRUCTION, sat.visible);
            }
        }
    }

    #[test]
    fn test_satellite_visibility_varies() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_visible = false;
        let mut seen_hidden = false;
        for _ in 0..20 {
            if let MockPayload::Satellite(resp) = satellite(&ctx(), &mut rng) {
                seen_visible |= resp.satellites.iter().any(|s| s.visible);
                seen_hidden |= resp.satellites.iter().any(|s| !s.visible);
            }
        }
        assert!(seen_visible && seen_hidden);
    }

    #[test]
    fn test_trajectory_ranges() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let MockPayload::Trajectory(resp) = trajectory(&ctx(), &mut rng) else {
                panic!("expected trajectory payload");
            };
            let t = resp.trajectory;
            assert_eq!(t.flight_id, "TEST001");
            assert_eq!(t.aircraft_type, "B737-800");
            assert!((t.position.latitude - BASE_LATITUDE).abs() <= 0.010_001);
            assert!((t.position.longitude - BASE_LONGITUDE).abs() <= 0.010_001);
            assert!((9_000.0..=11_000.0).contains(&t.position.altitude));
            assert!((-5.0..=5.0).contains(&t.attitude.roll));
            assert!((-3.0..=3.0).contains(&t.attitude.pitch));
            assert!((0.0..=360.0).contains(&t.attitude.yaw));
            assert!((200.0..=300.0).contains(&t.velocity.speed));
            assert!((-10.0..=10.0).contains(&t.velocity.vertical_speed));
            assert!(has_one_decimal(t.position.altitude));
            assert!(has_one_decimal(t.velocity.speed));
        }
    }

    #[test]
    fn test_analysis_counts_are_consistent() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let MockPayload::Analysis(resp) = analysis(&ctx(), &mut rng) else {
                panic!("expected analysis payload");
            };
            let a = resp.analysis;
            assert_eq!(a.total_satellites, 12);
            assert!((8..=12).contains(&a.visible_satellites));
            assert_eq!(a.visible_satellites + a.obstructed_satellites, 12);
            assert!((40.0..=55.0).contains(&a.avg_signal_strength));
            assert_eq!(a.visibility_stats.excellent, a.visible_satellites - 2);
            assert_eq!(a.visibility_stats.none, a.obstructed_satellites);
            assert_eq!(a.obstruction_stats.no_obstruction, a.visible_satellites - 1);
            assert_eq!(a.obstruction_stats.full_obstruction, a.obstructed_satellites);
            assert_eq!(a.coverage_quality, coverage_quality(a.visible_satellites));
        }
    }

    #[test]
    fn test_coverage_quality_strings() {
        assert_eq!(coverage_quality(8), "66.7%");
        assert_eq!(coverage_quality(9), "75.0%");
        assert_eq!(coverage_quality(10), "83.3%");
        assert_eq!(coverage_quality(11), "91.7%");
        assert_eq!(coverage_quality(12), "100.0%");
    }

    #[test]
    fn test_status_reports_bound_port() {
        let mut rng = StdRng::seed_from_u64(0);
        let ctx = MockContext {
            port: 8083,
            ..ctx()
        };
        let MockPayload::Status(resp) = status(&ctx, &mut rng) else {
            panic!("expected status payload");
        };
        assert_eq!(resp.server.port, 8083);
        assert_eq!(resp.system.status, "运行中");
        assert_eq!(resp.modules.websocket, "已启用");
    }

    #[test]
    fn test_normalize_azimuth() {
        assert!((normalize_azimuth(-3.2) - 356.8).abs() < 1e-9);
        assert!(normalize_azimuth(359.99).abs() < f64::EPSILON);
        assert!((normalize_azimuth(45.0) - 45.0).abs() < f64::EPSILON);
    }
}
