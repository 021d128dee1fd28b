//! Fixed templates. Placeholders use `{{NAME}}`; `${...}` is Maven/Spring
//! property syntax and passes through untouched.

pub(crate) const POM_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <groupId>{{GROUP_ID}}</groupId>
    <artifactId>{{ARTIFACT_ID}}</artifactId>
    <version>{{VERSION}}</version>
    <name>{{NAME}}</name>
    <description>{{DESCRIPTION}}</description>

    <properties>
        <java.version>{{JAVA_VERSION}}</java.version>
        <spring-boot.version>{{BOOT_VERSION}}</spring-boot.version>
        <maven.compiler.release>${java.version}</maven.compiler.release>
        <project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>
    </properties>

    <dependencyManagement>
        <dependencies>
            <dependency>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-dependencies</artifactId>
                <version>${spring-boot.version}</version>
                <type>pom</type>
                <scope>import</scope>
            </dependency>
        </dependencies>
    </dependencyManagement>

    <dependencies>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter</artifactId>
        </dependency>
{{DEPENDENCIES}}    </dependencies>

    <build>
        <plugins>
            <plugin>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-maven-plugin</artifactId>
                <version>${spring-boot.version}</version>
            </plugin>
        </plugins>
    </build>
</project>
"#;

pub(crate) const DEPENDENCY: &str = "        <dependency>
            <groupId>{{GROUP_ID}}</groupId>
            <artifactId>{{ARTIFACT_ID}}</artifactId>
{{EXTRA}}        </dependency>
";

pub(crate) const UNRESOLVED_DEPENDENCY: &str =
    "        <!-- unresolved dependency: \"{{ID}}\" -->\n";

pub(crate) const APPLICATION_JAVA: &str = "package {{PACKAGE}};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class Application {

    public static void main(String[] args) {
        SpringApplication.run(Application.class, args);
    }
}
";

pub(crate) const APPLICATION_PROPERTIES: &str = "spring.application.name={{APPLICATION_NAME}}
server.port={{SERVER_PORT}}
spring.main.banner-mode={{BANNER_MODE}}
";

pub(crate) const LOCAL_PROFILE_PROPERTIES: &str = "spring.datasource.url={{DATASOURCE_URL}}
spring.datasource.username={{DATASOURCE_USERNAME}}
spring.datasource.password={{DATASOURCE_PASSWORD}}
";

pub(crate) const DEPLOYED_PROFILE_PROPERTIES: &str = "spring.datasource.url=${DB_URL}
spring.datasource.username=${DB_USERNAME}
spring.datasource.password=${DB_PASSWORD}
";
