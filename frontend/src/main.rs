fn main() {
    advisories_frontend::start();
}
