use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " FlickFind ".yellow());
    println!("Usage:");
    println!("  {} <phrase>", "flickfind".bold().green());
    println!(
        "  {} g <latitude> <longitude>",
        "flickfind".bold().green()
    );
    println!("\nOptions:");
    println!(
        "  {}   Search photos around a latitude/longitude pair.",
        "g".bold().cyan()
    );
    println!(
        "  {}     Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nArguments:");
    println!(
        "  {}  Keywords to search photos by.",
        "<phrase>".bold().green()
    );
    println!(
        "  {}  Latitude in [-90, 90], longitude in [-180, 180].",
        "g <latitude> <longitude>".bold().cyan()
    );
    println!("\nExamples:");
    println!("  {} sunset over water", "flickfind".bold().green());
    println!("  {} g 37.8 -122.4", "flickfind".bold().cyan());
    println!("\nConfiguration:");
    println!(
        "  Set {} in the environment or a .env file.",
        "FLICKR_API_KEY".bold()
    );
    println!("{:━^60}", "".yellow());
}
