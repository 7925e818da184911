//! Fixed file contents written into generated projects.

use std::fmt::Write;

use super::DatabaseConfig;

/// Go Dockerfile; the `builder` stage is what docker-compose targets.
pub const GO_DOCKERFILE: &str = "\
FROM golang:1.22-alpine AS builder
WORKDIR /app
COPY go.mod go.sum* ./
RUN go mod download
COPY . .
RUN CGO_ENABLED=0 go build -o /app/server ./cmd/api
EXPOSE 8080
CMD [\"/app/server\"]

FROM alpine:latest
WORKDIR /app
COPY --from=builder /app/server /app/server
EXPOSE 8080
ENTRYPOINT [\"/app/server\"]
";

/// Spring Boot Dockerfile.
pub const SPRING_DOCKERFILE: &str = "\
FROM openjdk:17-jdk-slim
VOLUME /tmp
COPY build/libs/*.jar app.jar
ENTRYPOINT [\"java\",\"-Djava.security.egd=file:/dev/./urandom\",\"-jar\",\"/app.jar\"]";

/// Stub source for a Go package.
pub fn go_stub(package: &str) -> String {
    if package == "main" {
        "package main\n\nfunc main() {\n\t// TODO: Implement\n}\n".to_string()
    } else {
        format!("package {package}\n\n// TODO: Implement\n")
    }
}

/// docker-compose file with the app service and its database.
pub fn docker_compose(db: &DatabaseConfig) -> String {
    let mut environment = String::new();
    for (key, value) in db.container_environment() {
        // writing into a String cannot fail
        let _ = writeln!(environment, "      {key}: {value}");
    }

    format!(
        "version: '3.8'
services:
  app:
    build:
      context: .
      dockerfile: Dockerfile
      target: builder
    ports:
      - \"8080:8080\"
    depends_on:
      db:
        condition: service_healthy
    environment:
      DB_USER: {user}
      DB_PASSWORD: {password}
      DB_NAME: {name}
      DB_HOST: {host}
      DB_PORT: {port}
  db:
    image: {image}
    environment:
{environment}    volumes:
      - db-data:{data_dir}
    healthcheck:
      test: {healthcheck}
      timeout: 20s
      retries: 10
volumes:
  db-data:
",
        user = db.user,
        password = db.password,
        name = db.name,
        host = db.host,
        port = db.port,
        image = db.kind.image(),
        data_dir = db.kind.data_dir(),
        healthcheck = db.healthcheck(),
    )
}

/// Spring datasource settings.
pub fn application_properties(db: &DatabaseConfig) -> String {
    format!(
        "spring.datasource.url={}
spring.datasource.username={}
spring.datasource.password={}
spring.jpa.hibernate.ddl-auto=update",
        db.jdbc_url(),
        db.user,
        db.password
    )
}

/// Gradle settings naming the root project.
pub fn settings_gradle(project: &str) -> String {
    format!("rootProject.name = '{project}'")
}

/// Gradle build with Spring Boot, Lombok and JaCoCo coverage rules.
pub fn build_gradle(package: &str) -> String {
    format!(
        r#"plugins {{
    id 'java'
    id 'org.springframework.boot' version '3.1.6'
    id 'io.spring.dependency-management' version '1.1.4'
    id 'jacoco'
    id 'org.barfuin.gradle.jacocolog' version '3.1.0'
    id "io.sentry.jvm.gradle" version "3.14.0"
}}

group = '{package}'
version = '0.0.1-SNAPSHOT'

java {{
    sourceCompatibility = '17'
}}

configurations {{
    compileOnly {{
        extendsFrom annotationProcessor
    }}
}}

repositories {{
    mavenCentral()
}}

ext {{
    set('springCloudVersion', "2022.0.4")
}}

dependencies {{
    implementation 'org.springframework.boot:spring-boot-starter-data-jpa'
    implementation 'org.springframework.boot:spring-boot-starter-web'
    compileOnly 'org.projectlombok:lombok'
    annotationProcessor 'org.projectlombok:lombok'
    testImplementation 'org.springframework.boot:spring-boot-starter-test'
    runtimeOnly 'org.postgresql:postgresql'
}}

dependencyManagement {{
    imports {{
        mavenBom "org.springframework.cloud:spring-cloud-dependencies:${{springCloudVersion}}"
    }}
}}

tasks.named('test') {{
    useJUnitPlatform()
}}

test {{
    finalizedBy jacocoTestReport
    finalizedBy jacocoTestCoverageVerification
}}

jacocoTestReport {{
    dependsOn test
    reports {{
        xml.required = true
    }}
    afterEvaluate {{
        classDirectories.setFrom(files(classDirectories.files.collect {{
            fileTree(dir: it, exclude: ["**/configs/**", "**/*Application*", "**/exceptions/**"])
        }}))
    }}
}}

jacocoTestCoverageVerification {{
    dependsOn jacocoTestReport
    violationRules {{
        rule {{
            limit {{
                minimum = 0.80
            }}
        }}
    }}
}}"#
    )
}
