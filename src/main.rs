use segno::runtime;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
