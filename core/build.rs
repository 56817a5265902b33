fn main() {
    uniffi::generate_scaffolding("src/divetables.udl").unwrap();
}
