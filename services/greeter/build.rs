fn main() -> Result<(), Box<dyn std::error::Error>> {
    // tonic-build 通过 PROTOC 环境变量定位 protoc，
    // 未设置时退回到 vendored 二进制，避免系统级依赖
    if std::env::var_os("PROTOC").is_none() {
        let protoc = protoc_bin_vendored::protoc_bin_path()?;
        unsafe { std::env::set_var("PROTOC", &protoc) };
    }

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["../../proto/greeter/v1/greeter.proto"], &["../../proto"])?;

    println!("cargo:rerun-if-changed=../../proto/greeter/v1/greeter.proto");

    Ok(())
}
