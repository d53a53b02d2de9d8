//! Court geometry: floor, markings, hoops, and stadium dressing

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::path::Path;

use crate::ball::{Ball, BallMode, BallSpin, FlightVelocity, GroundVelocity};
use crate::constants::*;
use crate::generate;

// Hoop structure
const POLE_HEIGHT: f32 = 4.0;
const POLE_RADIUS: f32 = 0.1;
const POLE_SETBACK: f32 = 1.2; // Behind the baseline
const ARM_LENGTH: f32 = 1.2;
const BACKBOARD_WIDTH: f32 = 2.4;
const BACKBOARD_HEIGHT: f32 = 1.4;
const BACKBOARD_THICKNESS: f32 = 0.05;

// Floor markings
const LINE_WIDTH: f32 = 0.05;
const LINE_THICKNESS: f32 = 0.02;
const BOUNDARY_LINE_WIDTH: f32 = 0.07;
const CENTER_CIRCLE_RADIUS: f32 = 1.8;
const THREE_POINT_RADIUS: f32 = 6.75;
const FREE_THROW_CIRCLE_RADIUS: f32 = 1.8;
const KEY_LENGTH: f32 = 3.6;
const KEY_WIDTH: f32 = 3.6;

// Chain net
const NET_STRANDS: usize = 12;
const NET_LINKS_PER_STRAND: usize = 8;
const NET_LINK_LENGTH: f32 = 0.05;
const NET_LINK_RADIUS: f32 = 0.008;

// Stands
const BLEACHER_ROWS: usize = 10;
const SEATS_PER_ROW: usize = 52;
const SEAT_WIDTH: f32 = 0.5;
const SEAT_HEIGHT: f32 = 0.4;
const SEAT_DEPTH: f32 = 0.5;

/// Build the whole arena at startup
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    spawn_lighting(&mut commands);
    spawn_floor(&mut commands, &mut meshes, &mut materials);
    spawn_court_markings(&mut commands, &mut meshes, &mut materials);
    spawn_hoop(&mut commands, &mut meshes, &mut materials, -COURT_HALF_LENGTH);
    spawn_hoop(&mut commands, &mut meshes, &mut materials, COURT_HALF_LENGTH);
    spawn_ball(
        &mut commands,
        &mut meshes,
        &mut materials,
        load_generated(
            &asset_server,
            generate::BALL_TEXTURE_FILE,
            generate::BALL_TEXTURE_ASSET,
        ),
    );
    spawn_bleachers(&mut commands, &mut meshes, &mut materials);
    spawn_scoreboards(
        &mut commands,
        &mut meshes,
        &mut materials,
        load_generated(
            &asset_server,
            generate::SCOREBOARD_FACE_FILE,
            generate::SCOREBOARD_FACE_ASSET,
        ),
    );
}

/// Load a generated PNG if it made it to disk. Generation runs earlier
/// in startup, so a missing file means it failed and the material keeps
/// its flat base color.
fn load_generated(
    asset_server: &AssetServer,
    file: &str,
    asset: &str,
) -> Option<Handle<Image>> {
    if Path::new(file).exists() {
        Some(asset_server.load(asset.to_string()))
    } else {
        warn!("Missing {}, using a flat material instead", file);
        None
    }
}

/// Arena lighting: soft ambient fill plus one shadow-casting sun
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        brightness: 300.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 15.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Spawn the hardwood floor slab
pub fn spawn_floor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(COURT_LENGTH, FLOOR_THICKNESS, COURT_WIDTH))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.76, 0.58, 0.38),
            perceptual_roughness: 0.85,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}

/// Spawn all painted floor lines: center line and circle, three-point
/// arcs, keys, free-throw circles, and the court boundary
pub fn spawn_court_markings(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let paint = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    // Center line
    spawn_line(
        commands,
        meshes,
        &paint,
        Vec3::new(0.0, LINE_Y, 0.0),
        Vec2::new(LINE_WIDTH, COURT_WIDTH),
    );

    // Center circle
    spawn_arc(
        commands,
        meshes,
        &paint,
        Vec3::new(0.0, LINE_Y, 0.0),
        CENTER_CIRCLE_RADIUS,
        0.0,
        TAU,
        64,
        1,
    );

    // Three-point arcs bulge from each baseline toward center court
    let arc_x = COURT_HALF_LENGTH + 0.3 - BACKBOARD_THICKNESS / 2.0 - RIM_RADIUS;
    spawn_arc(
        commands,
        meshes,
        &paint,
        Vec3::new(-arc_x, LINE_Y, 0.0),
        THREE_POINT_RADIUS,
        -FRAC_PI_2,
        PI,
        48,
        1,
    );
    spawn_arc(
        commands,
        meshes,
        &paint,
        Vec3::new(arc_x, LINE_Y, 0.0),
        THREE_POINT_RADIUS,
        FRAC_PI_2,
        PI,
        48,
        1,
    );

    for sign in [-1.0_f32, 1.0] {
        let free_throw_x = sign * (COURT_HALF_LENGTH - KEY_LENGTH);

        // Key outline: two long rails plus the free-throw line
        for side in [-1.0_f32, 1.0] {
            spawn_line(
                commands,
                meshes,
                &paint,
                Vec3::new(sign * (COURT_HALF_LENGTH - KEY_LENGTH / 2.0), LINE_Y, side * KEY_WIDTH / 2.0),
                Vec2::new(KEY_LENGTH, LINE_WIDTH),
            );
        }
        spawn_line(
            commands,
            meshes,
            &paint,
            Vec3::new(free_throw_x, LINE_Y, 0.0),
            Vec2::new(LINE_WIDTH, KEY_WIDTH),
        );

        // Free-throw circle: solid half toward center court, dashed
        // half toward the baseline
        let toward_center = if sign < 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 };
        spawn_arc(
            commands,
            meshes,
            &paint,
            Vec3::new(free_throw_x, LINE_Y, 0.0),
            FREE_THROW_CIRCLE_RADIUS,
            toward_center,
            PI,
            32,
            1,
        );
        spawn_arc(
            commands,
            meshes,
            &paint,
            Vec3::new(free_throw_x, LINE_Y - 0.01, 0.0),
            FREE_THROW_CIRCLE_RADIUS,
            toward_center + PI,
            PI,
            32,
            2,
        );
    }

    // Boundary: sidelines and baselines, slightly wider than interior lines
    for side in [-1.0_f32, 1.0] {
        spawn_line(
            commands,
            meshes,
            &paint,
            Vec3::new(0.0, LINE_Y, side * COURT_HALF_WIDTH),
            Vec2::new(COURT_LENGTH, BOUNDARY_LINE_WIDTH),
        );
        spawn_line(
            commands,
            meshes,
            &paint,
            Vec3::new(side * COURT_HALF_LENGTH, LINE_Y, 0.0),
            Vec2::new(BOUNDARY_LINE_WIDTH, COURT_WIDTH),
        );
    }
}

/// One flat painted line segment, sized on the court plane (x, z)
fn spawn_line(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: &Handle<StandardMaterial>,
    center: Vec3,
    size: Vec2,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size.x, LINE_THICKNESS, size.y))),
        MeshMaterial3d(material.clone()),
        Transform::from_translation(center),
    ));
}

/// Lay a flat arc of short line segments on the floor.
/// A `step` of 2 draws every other segment, giving a dashed arc.
#[allow(clippy::too_many_arguments)]
fn spawn_arc(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: &Handle<StandardMaterial>,
    center: Vec3,
    radius: f32,
    start_angle: f32,
    sweep: f32,
    segments: usize,
    step: usize,
) {
    let seg_angle = sweep / segments as f32;
    // Slight overlap hides the joints between segments
    let seg_length = radius * seg_angle * 1.05;
    let mesh = meshes.add(Cuboid::new(seg_length, LINE_THICKNESS, LINE_WIDTH));

    for i in (0..segments).step_by(step) {
        let mid = start_angle + (i as f32 + 0.5) * seg_angle;
        let offset = Vec3::new(mid.cos() * radius, 0.0, mid.sin() * radius);
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(center + offset)
                .with_rotation(Quat::from_rotation_y(-mid - FRAC_PI_2)),
        ));
    }
}

/// Spawn one hoop assembly behind the given baseline: pole, support
/// arm, backboard, rim, and chain net
pub fn spawn_hoop(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    baseline_x: f32,
) {
    let sign = baseline_x.signum();
    let steel = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(102, 102, 102),
        perceptual_roughness: 0.6,
        metallic: 0.4,
        ..default()
    });

    // Pole behind the baseline
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(POLE_RADIUS, POLE_HEIGHT))),
        MeshMaterial3d(steel.clone()),
        Transform::from_xyz(baseline_x + sign * POLE_SETBACK, POLE_HEIGHT / 2.0, 0.0),
    ));

    // Support arm reaching from the pole toward the court
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(ARM_LENGTH, 0.15, 0.15))),
        MeshMaterial3d(steel),
        Transform::from_xyz(
            baseline_x + sign * (POLE_SETBACK - ARM_LENGTH / 2.0),
            RIM_HEIGHT + 0.5,
            0.0,
        ),
    ));

    // Semi-transparent backboard just inside the baseline
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(
            BACKBOARD_THICKNESS,
            BACKBOARD_HEIGHT,
            BACKBOARD_WIDTH,
        ))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.9, 0.9, 0.95, 0.8),
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 0.2,
            ..default()
        })),
        Transform::from_xyz(
            baseline_x - sign * BACKBOARD_THICKNESS / 2.0,
            RIM_HEIGHT + 0.45,
            0.0,
        ),
    ));

    // Rim torus already lies flat in the court plane
    let rim_center = Vec3::new(sign * RIM_X, RIM_HEIGHT, 0.0);
    commands.spawn((
        Mesh3d(meshes.add(Torus {
            minor_radius: RIM_TUBE_RADIUS,
            major_radius: RIM_RADIUS,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(255, 102, 0),
            perceptual_roughness: 0.4,
            metallic: 0.6,
            ..default()
        })),
        Transform::from_translation(rim_center),
    ));

    spawn_chain_net(commands, meshes, materials, rim_center);
}

/// Hang a chain net from a rim: vertical strands of alternating links
/// joined by diagonal connectors
fn spawn_chain_net(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rim_center: Vec3,
) {
    let mut rng = rand::thread_rng();
    let chain = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(204, 204, 204),
        perceptual_roughness: 0.3,
        metallic: 0.8,
        ..default()
    });
    let link_mesh = meshes.add(Torus {
        minor_radius: NET_LINK_RADIUS,
        major_radius: NET_LINK_LENGTH * 0.6,
    });
    let ring_radius = RIM_RADIUS * 0.85;

    let mut strands: Vec<Vec<Vec3>> = Vec::with_capacity(NET_STRANDS);
    for i in 0..NET_STRANDS {
        let angle = i as f32 / NET_STRANDS as f32 * TAU;
        let top = rim_center + Vec3::new(angle.cos() * ring_radius, 0.0, angle.sin() * ring_radius);

        let mut points = Vec::with_capacity(NET_LINKS_PER_STRAND);
        for j in 0..NET_LINKS_PER_STRAND {
            let point = top - Vec3::new(0.0, j as f32 * NET_LINK_LENGTH, 0.0);
            points.push(point);

            // Alternate link planes like a real chain, with a little yaw
            // jitter so the strands do not look stamped
            let upright = if j % 2 == 1 {
                Quat::from_rotation_z(FRAC_PI_2)
            } else {
                Quat::from_rotation_x(FRAC_PI_2)
            };
            let jitter = Quat::from_rotation_y(rng.gen_range(-0.15..0.15));
            commands.spawn((
                Mesh3d(link_mesh.clone()),
                MeshMaterial3d(chain.clone()),
                Transform::from_translation(point).with_rotation(jitter * upright),
            ));
        }
        strands.push(points);
    }

    // Diagonal connectors between neighboring strands. All pairs are the
    // same distance apart, so one mesh serves every connector.
    let connector_length = strands[0][0].distance(strands[1][1]);
    let connector_mesh = meshes.add(Cylinder::new(NET_LINK_RADIUS / 2.0, connector_length));
    for i in 0..NET_STRANDS {
        let next = (i + 1) % NET_STRANDS;
        for j in 0..NET_LINKS_PER_STRAND - 1 {
            let a = strands[i][j];
            let b = strands[next][j + 1];
            commands.spawn((
                Mesh3d(connector_mesh.clone()),
                MeshMaterial3d(chain.clone()),
                Transform::from_translation(a.midpoint(b))
                    .with_rotation(Quat::from_rotation_arc(Vec3::Y, (b - a).normalize())),
            ));
        }
    }
}

/// Spawn the playable ball at center court with its motion components
pub fn spawn_ball(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    texture: Option<Handle<Image>>,
) {
    let base_color = if texture.is_some() {
        Color::WHITE
    } else {
        // Same leather orange the generated texture is built on
        Color::srgb_u8(238, 103, 48)
    };
    commands.spawn((
        Ball,
        BallMode::default(),
        GroundVelocity::default(),
        FlightVelocity::default(),
        BallSpin::default(),
        // UV sphere so the seam texture wraps cleanly
        Mesh3d(meshes.add(Sphere::new(BALL_RADIUS).mesh().uv(32, 18))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color,
            base_color_texture: texture,
            perceptual_roughness: 0.8,
            ..default()
        })),
        Transform::from_translation(BALL_SPAWN),
    ));
}

/// Fill both sidelines with rows of bleacher seats
pub fn spawn_bleachers(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let seat_mesh = meshes.add(Cuboid::new(SEAT_WIDTH, SEAT_HEIGHT, SEAT_DEPTH));
    let seat_mat = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(59, 90, 163),
        perceptual_roughness: 0.9,
        ..default()
    });

    for side in [-1.0_f32, 1.0] {
        for row in 0..BLEACHER_ROWS {
            for seat in 0..SEATS_PER_ROW {
                let x = -COURT_HALF_LENGTH + seat as f32 * (SEAT_WIDTH + 0.05);
                let y = row as f32 * SEAT_HEIGHT + SEAT_HEIGHT / 2.0;
                let z = side * (COURT_HALF_WIDTH + 2.0 + row as f32 * (SEAT_DEPTH + 0.1));
                commands.spawn((
                    Mesh3d(seat_mesh.clone()),
                    MeshMaterial3d(seat_mat.clone()),
                    Transform::from_xyz(x, y, z),
                ));
            }
        }
    }
}

/// Hang a scoreboard over each end of the arena on cylinder struts
pub fn spawn_scoreboards(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    face: Option<Handle<Image>>,
) {
    let base_color = if face.is_some() {
        Color::WHITE
    } else {
        Color::srgb(0.05, 0.05, 0.05)
    };
    let face_mesh = meshes.add(Plane3d::new(Vec3::Z, Vec2::new(6.0, 1.5)));
    let face_mat = materials.add(StandardMaterial {
        base_color,
        base_color_texture: face,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let strut_mat = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(68, 68, 68),
        ..default()
    });
    let support_mesh = meshes.add(Cylinder::new(0.1, 8.0));
    let beam_mesh = meshes.add(Cylinder::new(0.08, 10.0));

    for z in [-18.0_f32, 18.0] {
        commands.spawn((
            Mesh3d(face_mesh.clone()),
            MeshMaterial3d(face_mat.clone()),
            Transform::from_xyz(0.0, 10.0, z),
        ));
        for x in [-5.0_f32, 5.0] {
            commands.spawn((
                Mesh3d(support_mesh.clone()),
                MeshMaterial3d(strut_mat.clone()),
                Transform::from_xyz(x, 6.0, z),
            ));
        }
        commands.spawn((
            Mesh3d(beam_mesh.clone()),
            MeshMaterial3d(strut_mat.clone()),
            Transform::from_xyz(0.0, 2.0, z).with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
        ));
    }
}
