// The windowing and frame-buffer plumbing is based on the pixels conway example
//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::io;

mod automata;
mod auxiliary;
mod life;
mod patterns;
mod viewer;

use automata::CellAutomata;
use auxiliary::window::{SCREEN_HEIGHT, SCREEN_WIDTH};
use life::cell::Polarity;
use life::FadingLife;
use patterns::Pattern;

/// Generations from a cell's death until it is fully faded out.
const FADE_STEPS: u32 = 10;

fn new_life() -> Result<FadingLife, life::LifeError> {
    FadingLife::new(
        SCREEN_WIDTH as usize,
        SCREEN_HEIGHT as usize,
        FADE_STEPS,
        Polarity::AliveLow,
    )
}

fn run_pattern(pattern: &Pattern) -> Result<(), Box<dyn std::error::Error>> {
    let mut life = new_life()?;
    life.seed(&pattern.centered(SCREEN_WIDTH as isize, SCREEN_HEIGHT as isize));
    viewer::run(life)?;
    Ok(())
}

fn run_soup() -> Result<(), Box<dyn std::error::Error>> {
    let mut life = new_life()?;
    life.randomize();
    viewer::run(life)?;
    Ok(())
}

fn select_seed(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    match input {
        "1" => run_pattern(&patterns::GLIDER),
        "2" => run_pattern(&patterns::SPACESHIP),
        "3" => run_pattern(&patterns::GLIDER_GUN),
        "4" => run_soup(),
        _ => {
            println!("unknown pattern");
            Ok(())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("\nWelcome to fading life!\nLive cells are black and fade to white over {FADE_STEPS} generations when they die.\nPress 'q' to quit this screen.");
    loop {
        println!("\n\nWhich seed would you like?\n\n1) Glider\n2) Spaceship (64P2H1V0)\n3) Gosper glider gun\n4) Random soup");
        let mut val = String::new();
        io::stdin().read_line(&mut val).expect("Failed to read line");

        let v = val.trim();

        if v == "q" || v == "quit" {
            break;
        }

        println!("\n\nControls for the animation:\nC: clear screen\nP: pause\nR: randomize screen\nSPACE: advance one generation\nESC: close screen");
        match select_seed(v) {
            Ok(_) => continue,
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}
