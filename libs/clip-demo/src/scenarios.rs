//! Example solids and the pairs the driver intersects.

use anyhow::{Context, Result};
use clap::ValueEnum;
use convex_clip::{cuboid, skewed_cuboid, tetrahedron, ClipConfig, Polyhedron, Vec3};
use tracing::info;

/// Which example intersection to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Cubes `[-2, 2]³` and `[1, 3]³`, overlapping in `[1, 2]³`
    Overlap,
    /// Cubes `[-2, 2]³` and `[5, 7]³`, which never touch
    Disjoint,
    /// A tetrahedron inside the cube `[-2, 2]³`
    Contained,
    /// A sheared box against `[1, 10]³` and against a large tetrahedron
    Skewed,
    /// Every scenario above, in order
    All,
}

impl Scenario {
    /// Expands `All` into the concrete scenarios.
    pub fn expand(self) -> Vec<Scenario> {
        match self {
            Scenario::All => vec![
                Scenario::Overlap,
                Scenario::Disjoint,
                Scenario::Contained,
                Scenario::Skewed,
            ],
            other => vec![other],
        }
    }
}

/// One named `subject.clip(clipper)` call.
pub struct Case {
    pub name: &'static str,
    pub subject: Polyhedron,
    pub clipper: Polyhedron,
}

/// Outcome of running a [`Case`].
pub struct Outcome {
    pub name: &'static str,
    pub result: Option<Polyhedron>,
}

/// Builds the cases that make up `scenario`.
pub fn cases(scenario: Scenario) -> Result<Vec<Case>> {
    let cube = cuboid(Vec3::splat(-2.0), Vec3::splat(2.0)).context("building cube A")?;

    let cases = match scenario {
        Scenario::Overlap => vec![Case {
            name: "overlap",
            subject: cube,
            clipper: cuboid(Vec3::splat(1.0), Vec3::splat(3.0))?,
        }],
        Scenario::Disjoint => vec![Case {
            name: "disjoint",
            subject: cube,
            clipper: cuboid(Vec3::splat(5.0), Vec3::splat(7.0))?,
        }],
        Scenario::Contained => vec![Case {
            name: "contained",
            subject: tetrahedron(
                Vec3::new(-1.0, -1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
                Vec3::new(0.0, 1.0, -1.0),
                Vec3::new(0.0, 0.0, 1.0),
            )
            .context("building inner tetrahedron")?,
            clipper: cube,
        }],
        Scenario::Skewed => {
            let sheared =
                skewed_cuboid(Vec3::splat(-2.0), Vec3::splat(2.0), Vec3::new(-2.5, 0.0, 0.0))
                    .context("building sheared box")?;
            let large = tetrahedron(
                Vec3::new(0.0, 0.0, -10.0),
                Vec3::new(10.0, 0.0, 0.0),
                Vec3::new(-10.0, 0.0, 0.0),
                Vec3::new(0.0, 10.0, -5.0),
            )
            .context("building large tetrahedron")?;
            vec![
                Case {
                    name: "skewed-vs-box",
                    subject: sheared.clone(),
                    clipper: cuboid(Vec3::splat(1.0), Vec3::splat(10.0))?,
                },
                Case {
                    name: "skewed-vs-tetrahedron",
                    subject: sheared,
                    clipper: large,
                },
            ]
        }
        Scenario::All => {
            let mut all = Vec::new();
            for single in scenario.expand() {
                all.extend(cases(single)?);
            }
            all
        }
    };
    Ok(cases)
}

/// Clips `case.subject` by `case.clipper`.
pub fn run(case: Case, config: &ClipConfig) -> Result<Outcome> {
    info!(
        case = case.name,
        subject_faces = case.subject.face_count(),
        clipper_faces = case.clipper.face_count(),
        "clipping"
    );

    let result = case
        .subject
        .clip_with(&case.clipper, config)
        .with_context(|| format!("clipping case '{}'", case.name))?;

    Ok(Outcome {
        name: case.name,
        result,
    })
}
