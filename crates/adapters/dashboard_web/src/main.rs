fn main() {
    powerstrip_adapter_dashboard_web::start();
}
