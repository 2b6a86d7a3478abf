pub fn run(host: &str, port: u16) {
    let base = format!("http://{host}:{port}");
    let fleet = aeromon_core::machines().len();

    println!("Aeromon Server v{}", aeromon_core::VERSION);
    println!("   {base}");
    println!("   {fleet} machines simulated");
    println!();
    println!("   Endpoints:");
    println!("     GET    /                                  API index (try: curl {base})");
    println!("     GET    /machines                          Fleet overview with summary counts");
    println!("     GET    /machines/{{id}}                     Machine detail");
    println!("     GET    /machines/{{id}}/metrics             Current metric snapshot");
    println!("     GET    /machines/{{id}}/alerts              Current alert feed");
    println!("     DELETE /machines/{{id}}/alerts/{{alert_id}}   Dismiss one alert");
    println!("     GET    /health                            Fleet health roll-up");
    println!();
    println!("   Examples:");
    println!("     curl {base}/machines");
    println!("     curl {base}/machines/1/metrics");
    println!("     curl -X DELETE {base}/machines/1/alerts/3");
    println!();

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(aeromon_server::run_server(host, port));
}
