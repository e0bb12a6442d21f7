//! Run the frame stages over a node table and print the results.
//!
//! Usage: `flightframes [nodes.csv] [segment.json]`
//!
//! The CSV needs columns `t, vx, vy, vz, roll, pitch, yaw, altitude`; the
//! force magnitudes `lift, drag, thrust, weight` are optional. The table is
//! split into two chained segments sharing the middle node.

use std::env;
use std::fs::File;
use std::ops::Range;

use flightframes_calc::{Conditions, Numerics, SegmentConfig, State, segment};
use ndarray::Array1;
use polars::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut args = env::args().skip(1);
    let csv_path = args.next().unwrap_or_else(|| "data/cruise.csv".to_string());
    let config = match args.next() {
        Some(path) => SegmentConfig::from_path(path)?,
        None => SegmentConfig::default(),
    };

    for (k, v) in config.planet.summary() {
        info!("{}: {}", k, v);
    }

    // 读取 CSV 文件
    let file = File::open(&csv_path)?;
    let df = CsvReader::new(file)
        .has_header(true)
        .finish()?;
    info!(rows = df.height(), columns = ?df.get_column_names(), "loaded node table");

    let table = NodeTable::from_frame(&df)?;
    let n = table.len();
    if n < 3 {
        return Err(format!("need at least 3 nodes, got {}", n).into());
    }
    let split = n / 2;

    let first = run_segment(&config, &table, 0..split + 1, None)?;
    let second = run_segment(&config, &table, split..n, Some(first.conditions.clone()))?;

    println!("Segment 1:");
    println!("{}", results_frame(&first.conditions)?);
    println!("Segment 2:");
    println!("{}", results_frame(&second.conditions)?);

    Ok(())
}

fn init_logging() {
    // defaults to INFO if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Node table columns as plain vectors.
struct NodeTable {
    t: Vec<f64>,
    velocity: [Vec<f64>; 3],
    rotations: [Vec<f64>; 3],
    altitude: Vec<f64>,
    lift: Vec<f64>,
    drag: Vec<f64>,
    thrust: Vec<f64>,
    weight: Vec<f64>,
}

impl NodeTable {
    fn from_frame(df: &DataFrame) -> PolarsResult<Self> {
        let n = df.height();
        Ok(Self {
            t: column_f64(df, "t")?,
            velocity: [column_f64(df, "vx")?, column_f64(df, "vy")?, column_f64(df, "vz")?],
            rotations: [
                column_f64(df, "roll")?,
                column_f64(df, "pitch")?,
                column_f64(df, "yaw")?,
            ],
            altitude: column_f64(df, "altitude")?,
            lift: optional_column_f64(df, "lift", n)?,
            drag: optional_column_f64(df, "drag", n)?,
            thrust: optional_column_f64(df, "thrust", n)?,
            weight: optional_column_f64(df, "weight", n)?,
        })
    }

    fn len(&self) -> usize {
        self.t.len()
    }

    /// Conditions for a run of rows, position left at zero for the initializer.
    fn conditions(&self, rows: Range<usize>) -> Conditions {
        let mut c = Conditions::new(rows.len());
        for (k, i) in rows.enumerate() {
            let inertial = &mut c.frames.inertial;
            inertial.time[k] = self.t[i];
            for j in 0..3 {
                inertial.velocity_vector[[k, j]] = self.velocity[j][i];
                c.frames.body.inertial_rotations[[k, j]] = self.rotations[j][i];
            }
            inertial.position_vector[[k, 2]] = -self.altitude[i];
            inertial.gravity_force_vector[[k, 2]] = self.weight[i];

            c.frames.wind.lift_force_vector[[k, 2]] = -self.lift[i];
            c.frames.wind.drag_force_vector[[k, 0]] = -self.drag[i];
            c.frames.body.thrust_force_vector[[k, 0]] = self.thrust[i];

            let v = &self.velocity;
            c.freestream.velocity[k] = (v[0][i].powi(2) + v[1][i].powi(2) + v[2][i].powi(2)).sqrt();
            c.freestream.altitude[k] = self.altitude[i];
        }
        c
    }
}

fn column_f64(df: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
    let series = df.column(name)?.cast(&DataType::Float64)?;
    Ok(series.f64()?.into_no_null_iter().collect())
}

fn optional_column_f64(df: &DataFrame, name: &str, n: usize) -> PolarsResult<Vec<f64>> {
    if df.get_column_names().contains(&name) {
        column_f64(df, name)
    } else {
        Ok(vec![0.0; n])
    }
}

fn run_segment(
    config: &SegmentConfig,
    table: &NodeTable,
    rows: Range<usize>,
    initials: Option<Conditions>,
) -> Result<State, Box<dyn std::error::Error>> {
    let conditions = table.conditions(rows.clone());
    let numerics = Numerics::trapezoidal(conditions.frames.inertial.time.view());
    let mut state = State::new(conditions, numerics, initials)?;

    segment::initialize(config, &mut state);
    segment::iterate(&mut state);
    segment::finalize(config, &mut state);

    info!(start = rows.start, end = rows.end, "segment complete");
    Ok(state)
}

fn results_frame(c: &Conditions) -> PolarsResult<DataFrame> {
    let inertial = &c.frames.inertial;
    let column = |a: ndarray::ArrayView1<f64>| a.to_vec();
    let degrees = |a: &Array1<f64>| a.mapv(f64::to_degrees).to_vec();

    DataFrame::new(vec![
        Series::new("t", inertial.time.to_vec()),
        Series::new("x", column(inertial.position_vector.column(0))),
        Series::new("y", column(inertial.position_vector.column(1))),
        Series::new("z", column(inertial.position_vector.column(2))),
        Series::new("alpha_deg", degrees(&c.aerodynamics.angle_of_attack)),
        Series::new("beta_deg", degrees(&c.aerodynamics.side_slip_angle)),
        Series::new("fx", column(inertial.total_force_vector.column(0))),
        Series::new("fy", column(inertial.total_force_vector.column(1))),
        Series::new("fz", column(inertial.total_force_vector.column(2))),
        Series::new("ax", column(inertial.acceleration_vector.column(0))),
        Series::new("lat", c.frames.planet.latitude.to_vec()),
        Series::new("lon", c.frames.planet.longitude.to_vec()),
    ])
}
