//! The literal nginx site configuration and the path it is written to.

/// Location of the site file nginx loads for kolo.cd.
pub const TARGET_PATH: &str = "/etc/nginx/sites-enabled/kolo";

/// Site configuration with two virtual hosts, plain HTTP on 80 and TLS on 443.
///
/// Written verbatim; nothing inspects or varies it at runtime.
pub const NGINX_SITE_CONFIG: &str = r#"server {
    listen 80;
    server_name kolo.cd www.kolo.cd 158.220.108.42;

    root /var/www/kolo/client/dist;
    index index.html;

    # Proxy Firebase auth handler for custom authDomain
    location /__/ {
        proxy_pass https://kolo-26.firebaseapp.com;
        proxy_set_header Host kolo-26.firebaseapp.com;
        proxy_ssl_server_name on;
        proxy_set_header X-Real-IP $remote_addr;
        proxy_set_header X-Forwarded-For $proxy_add_x_forwarded_for;
        proxy_set_header X-Forwarded-Proto $scheme;
        proxy_redirect off;
    }

    location /api/ {
        proxy_pass http://127.0.0.1:3001;
        proxy_http_version 1.1;
        proxy_set_header Upgrade $http_upgrade;
        proxy_set_header Connection 'upgrade';
        proxy_set_header Host $host;
        proxy_set_header X-Real-IP $http_cf_connecting_ip;
        proxy_set_header X-Forwarded-For $proxy_add_x_forwarded_for;
        proxy_set_header X-Forwarded-Proto $scheme;
        proxy_cache_bypass $http_upgrade;
        proxy_read_timeout 300s;
        proxy_connect_timeout 75s;
    }

    location / {
        try_files $uri $uri/ /index.html;
    }

    # Ticket images - short cache for easy updates
    location ~* ticket-.*\.png$ {
        expires 1h;
        add_header Cache-Control "no-cache";
        try_files $uri =404;
    }

    location ~* \.(js|css|png|jpg|jpeg|gif|ico|svg|woff|woff2|ttf|eot)$ {
        expires 1y;
        add_header Cache-Control "public, immutable";
        try_files $uri =404;
    }

    gzip on;
    gzip_types text/plain text/css application/json application/javascript text/xml application/xml text/javascript image/svg+xml;
    gzip_min_length 1000;
}

server {
    listen 443 ssl;
    server_name kolo.cd www.kolo.cd;

    ssl_certificate /etc/ssl/certs/kolo-selfsigned.crt;
    ssl_certificate_key /etc/ssl/private/kolo-selfsigned.key;

    root /var/www/kolo/client/dist;
    index index.html;

    # Proxy Firebase auth handler for custom authDomain
    location /__/ {
        proxy_pass https://kolo-26.firebaseapp.com;
        proxy_set_header Host kolo-26.firebaseapp.com;
        proxy_ssl_server_name on;
        proxy_set_header X-Real-IP $remote_addr;
        proxy_set_header X-Forwarded-For $proxy_add_x_forwarded_for;
        proxy_set_header X-Forwarded-Proto $scheme;
        proxy_redirect off;
    }

    location /api/ {
        proxy_pass http://127.0.0.1:3001;
        proxy_http_version 1.1;
        proxy_set_header Upgrade $http_upgrade;
        proxy_set_header Connection 'upgrade';
        proxy_set_header Host $host;
        proxy_set_header X-Real-IP $http_cf_connecting_ip;
        proxy_set_header X-Forwarded-For $proxy_add_x_forwarded_for;
        proxy_set_header X-Forwarded-Proto $scheme;
        proxy_cache_bypass $http_upgrade;
        proxy_read_timeout 300s;
        proxy_connect_timeout 75s;
    }

    location / {
        try_files $uri $uri/ /index.html;
    }

    # Ticket images - short cache for easy updates
    location ~* ticket-.*\.png$ {
        expires 1h;
        add_header Cache-Control "no-cache";
        try_files $uri =404;
    }

    location ~* \.(js|css|png|jpg|jpeg|gif|ico|svg|woff|woff2|ttf|eot)$ {
        expires 1y;
        add_header Cache-Control "public, immutable";
        try_files $uri =404;
    }

    gzip on;
    gzip_types text/plain text/css application/json application/javascript text/xml application/xml text/javascript image/svg+xml;
    gzip_min_length 1000;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_plain_and_tls_server_blocks() {
        assert_eq!(NGINX_SITE_CONFIG.matches("server {").count(), 2);
        assert!(NGINX_SITE_CONFIG.contains("    listen 80;\n"));
        assert!(NGINX_SITE_CONFIG.contains("    listen 443 ssl;\n"));
        assert!(NGINX_SITE_CONFIG.contains("ssl_certificate /etc/ssl/certs/kolo-selfsigned.crt;"));
        assert!(NGINX_SITE_CONFIG.contains("ssl_certificate_key /etc/ssl/private/kolo-selfsigned.key;"));
    }

    #[test]
    fn both_hosts_share_routes() {
        for route in [
            "location /__/ {",
            "location /api/ {",
            "location / {",
            r"location ~* ticket-.*\.png$ {",
            r"location ~* \.(js|css|png|jpg|jpeg|gif|ico|svg|woff|woff2|ttf|eot)$ {",
        ] {
            assert_eq!(NGINX_SITE_CONFIG.matches(route).count(), 2, "{route}");
        }
        assert_eq!(NGINX_SITE_CONFIG.matches("proxy_pass http://127.0.0.1:3001;").count(), 2);
        assert_eq!(NGINX_SITE_CONFIG.matches("gzip on;").count(), 2);
    }

    #[test]
    fn starts_and_ends_on_block_boundaries() {
        assert!(NGINX_SITE_CONFIG.starts_with("server {\n"));
        assert!(NGINX_SITE_CONFIG.ends_with("}\n"));
        assert_eq!(
            NGINX_SITE_CONFIG.matches('{').count(),
            NGINX_SITE_CONFIG.matches('}').count()
        );
    }
}
