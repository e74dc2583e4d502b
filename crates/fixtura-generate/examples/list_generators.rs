use fixtura_generate::DataGenerator;

fn main() {
    let generator = DataGenerator::new();
    for name in generator.generator_names() {
        println!("{name}");
    }
}
