//! cpf3d CLI - Inspect and transform 3CPF files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use cpf3d::{Pipeline, PointFrames, Transform, load_with_order};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_pipeline();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <input.3cpf> [pipeline.json] [output.3cpf]", args[0]);
        eprintln!();
        eprintln!("Inspect a 3CPF animation, optionally transform it and save the result.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  input.3cpf     File to load");
        eprintln!("  pipeline.json  Coordinate order and transforms to apply");
        eprintln!("  output.3cpf    Where to save the transformed animation");
        eprintln!();
        eprintln!("Example pipeline is printed with --example flag.");
        std::process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let pipeline = match args.get(2) {
        Some(path) => read_pipeline(path),
        None => Pipeline::default(),
    };
    let output = args.get(3).map(PathBuf::from);

    let start = Instant::now();
    let mut pf = load_with_order(&input, pipeline.coordinate_order).unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", input.display(), e);
        std::process::exit(1);
    });

    println!("3CPF Animation");
    println!("==============");
    println!("File: {}", input.display());
    println!("Coordinate order: {}", pipeline.coordinate_order);
    print_summary(&pf);

    if !pipeline.transforms.is_empty() {
        println!();
        println!("Applying {} transforms...", pipeline.transforms.len());
        pipeline.apply(&mut pf);
        print_summary(&pf);
    }

    if let Some(output) = output {
        if let Err(e) = pf.save(&output) {
            eprintln!("Error saving {}: {}", output.display(), e);
            std::process::exit(1);
        }
        println!();
        println!("Saved to {}", output.display());
    }

    println!("Time: {:.3}s", start.elapsed().as_secs_f32());
}

fn read_pipeline(path: &str) -> Pipeline {
    let pipeline_str = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading pipeline file: {}", e);
        std::process::exit(1);
    });

    let pipeline: Pipeline = serde_json::from_str(&pipeline_str).unwrap_or_else(|e| {
        eprintln!("Error parsing pipeline: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = pipeline.validate() {
        eprintln!("Invalid pipeline: {}", e);
        std::process::exit(1);
    }
    pipeline
}

fn print_summary(pf: &PointFrames) {
    println!("  Points: {}", pf.point_count());
    println!("  Frames: {}", pf.frame_count());

    let mut positions = pf.frames().iter().flat_map(|f| f.positions().iter().copied());
    if let Some(first) = positions.next() {
        let (min, max) = positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        println!(
            "  Bounds: [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }
}

fn print_example_pipeline() {
    let pipeline = Pipeline {
        coordinate_order: "xzy".parse().unwrap_or_default(),
        transforms: vec![
            Transform::Rotation {
                x: 0.0,
                y: 90.0,
                z: 0.0,
            },
            Transform::Scale {
                x: 0.01,
                y: 0.01,
                z: 0.01,
            },
            Transform::Offset {
                x: 0.0,
                y: 1.0,
                z: 0.0,
            },
        ],
    };

    println!("Example pipeline (pipeline.json):");
    match serde_json::to_string_pretty(&pipeline) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing pipeline: {}", e),
    }
}
