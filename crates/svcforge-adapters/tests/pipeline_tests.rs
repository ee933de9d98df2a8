//! Full make-service pipeline over the real adapters.

use std::path::Path;

use svcforge_adapters::{
    BuiltinStubStore, DirectoryStubStore, LocalFilesystem, MemoryFilesystem, SimpleRenderer,
};
use svcforge_core::application::{ApplicationError, ports::Filesystem};
use svcforge_core::prelude::*;
use tempfile::TempDir;

fn memory_service(fs: &MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(BuiltinStubStore::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
    )
}

#[test]
fn builtin_stubs_render_without_leftovers() {
    let fs = MemoryFilesystem::new();
    let settings = ScaffoldSettings::new("App", "/project/app");

    let report = memory_service(&fs)
        .scaffold(&ServiceRequest::new("order").with_interface(true), &settings)
        .unwrap();
    assert!(report.warnings.is_empty());

    let class = fs
        .read_file("/project/app/Services/OrderService.php")
        .unwrap();
    assert_eq!(
        class,
        "<?php\n\nnamespace App\\Services;\n\nuse App\\Services\\Interfaces\\OrderServiceInterface;\n\nclass OrderService implements OrderServiceInterface\n{\n    //\n}\n"
    );

    let interface = fs
        .read_file("/project/app/Services/Interfaces/OrderServiceInterface.php")
        .unwrap();
    assert!(interface.contains("namespace App\\Services\\Interfaces;"));
    assert!(interface.contains("interface OrderServiceInterface"));
}

#[test]
fn missing_directories_are_created() {
    let fs = MemoryFilesystem::new();
    let settings = ScaffoldSettings::new("App\\Domain\\Billing", "/p/app");

    memory_service(&fs)
        .scaffold(&ServiceRequest::new("invoice"), &settings)
        .unwrap();

    assert!(fs.is_dir(Path::new("/p/app/Domain/Billing/Services")));
    assert_eq!(fs.list_files().len(), 1);
}

#[test]
fn read_only_primary_dir_writes_nothing() {
    let fs = MemoryFilesystem::new();
    fs.mark_read_only("/project/app/Services");
    let settings = ScaffoldSettings::new("App", "/project/app");

    let err = memory_service(&fs)
        .scaffold(&ServiceRequest::new("order").with_interface(true), &settings)
        .unwrap_err();

    assert!(matches!(
        err,
        ForgeError::Application(ApplicationError::WriteFailed { .. })
    ));
    assert!(fs.list_files().is_empty());
}

#[test]
fn local_filesystem_end_to_end() {
    let temp = TempDir::new().unwrap();
    let app = temp.path().join("app");
    let settings = ScaffoldSettings::new("App", &app);

    let service = ScaffoldService::new(
        Box::new(BuiltinStubStore::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    let first = service
        .scaffold(&ServiceRequest::new("user"), &settings)
        .unwrap();
    assert_eq!(first.files[0].outcome, WriteOutcome::Created);

    let second = service
        .scaffold(&ServiceRequest::new("user"), &settings)
        .unwrap();
    assert_eq!(second.files[0].outcome, WriteOutcome::Overwritten);

    let content = std::fs::read_to_string(app.join("Services/UserService.php")).unwrap();
    assert!(content.contains("class UserService"));
}

#[test]
fn published_stubs_are_picked_up() {
    let temp = TempDir::new().unwrap();
    let stubs = temp.path().join("stubs");

    let templates = TemplateService::new(
        Box::new(BuiltinStubStore::new()),
        Box::new(SimpleRenderer::new()),
    );
    let published = templates.publish(&LocalFilesystem::new(), &stubs).unwrap();
    assert_eq!(published.len(), 3);

    std::fs::write(
        stubs.join("service.stub"),
        "<?php\n\nnamespace $CLASS_NAMESPACE$;\n\nfinal class $CLASS$ {}\n",
    )
    .unwrap();

    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(
        Box::new(DirectoryStubStore::new(&stubs)),
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
    );
    service
        .scaffold(
            &ServiceRequest::new("user"),
            &ScaffoldSettings::new("App", "/project/app"),
        )
        .unwrap();

    let content = fs
        .read_file("/project/app/Services/UserService.php")
        .unwrap();
    assert!(content.contains("final class UserService {}"));
}
