//! Test fixtures - reusable content for tests.

pub const SERVERLESS_YML: &str = "service: api\nprovider:\n  name: aws\n  runtime: nodejs18.x\n";

pub const PACKAGE_JSON: &str = r#"{
  "name": "api",
  "version": "1.0.0",
  "dependencies": {
    "uuid": "^9.0.0",
    "users-service": "file:../users"
  }
}
"#;

/// Compiled sources under `lib/` and one sibling service
pub const PACKAGR_JSON: &str = r#"{
  "compiledSourcesPattern": "lib/**/*",
  "microservices": {
    "users": {
      "path": "../users",
      "packageName": "users-service"
    }
  }
}
"#;

/// Files of the `api` project, relative to its root
pub const API_FILES: &[&str] = &[
    "lib/handlers/foo.js",
    "lib/index.js",
    "src/index.ts",
    "node_modules/uuid/index.js",
    "node_modules/users-service/package.json",
    "node_modules/users-service/lib/src/client.js",
];

/// Files of the sibling `users` service, relative to its root
pub const USERS_FILES: &[&str] = &["node_modules/axios/index.js", "node_modules/uuid/index.js"];

/// Archive entries produced by a full run over the default workspace
pub const EXPECTED_ENTRIES: &[&str] = &[
    "handlers/foo.js",
    "index.js",
    "node_modules/uuid/index.js",
    "node_modules/users-service/lib/src/client.js",
    "node_modules/users-service/package.json",
    "node_modules/axios/index.js",
];
